//! Boundary types for the external AI assistant (FINA)
//!
//! The generative assistant is an external collaborator: it receives a
//! read-only snapshot of the ledger plus the conversation so far, and
//! returns opaque text. This module owns the contract — the snapshot, the
//! chat history types, the deterministic prompt rendering, and the
//! fallback applied when the provider fails. Nothing here performs network
//! I/O; an actual client lives outside this crate and plugs in through
//! [`AdviceProvider`].
//!
//! The provider never mutates ledger state, and the ledger stays free to
//! change while a call is in flight: the snapshot is a copy taken at call
//! time, not a live reference.

use serde::{Deserialize, Serialize};

use crate::analytics::recent;
use crate::error::FinaResult;
use crate::ledger::Ledger;
use crate::models::{Money, TransactionKind};

/// Apology shown when the advice provider fails
pub const FALLBACK_MESSAGE: &str =
    "Desculpe, não consegui processar sua solicitação agora. Tente novamente em instantes. 🙏";

/// How many recent transactions the snapshot carries
const RECENT_TRANSACTIONS: usize = 5;

/// Who said a chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Fina,
}

/// One line of assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::User,
            text: text.into(),
        }
    }

    pub fn from_fina(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::Fina,
            text: text.into(),
        }
    }
}

/// A goal as the assistant sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalBrief {
    pub name: String,
    pub current_amount: Money,
    pub target_amount: Money,
}

/// A transaction as the assistant sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionBrief {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
}

/// Read-only copy of the ledger state handed to the advice provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorSnapshot {
    pub user_name: String,
    pub monthly_income: Money,
    pub current_balance: Money,
    pub goals: Vec<GoalBrief>,
    pub recent_transactions: Vec<TransactionBrief>,
}

impl AdvisorSnapshot {
    /// Copy the advisor-relevant slice of the ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            user_name: ledger.user_name().to_string(),
            monthly_income: ledger.monthly_income(),
            current_balance: ledger.current_balance(),
            goals: ledger
                .goals()
                .iter()
                .map(|g| GoalBrief {
                    name: g.name.clone(),
                    current_amount: g.current_amount,
                    target_amount: g.target_amount,
                })
                .collect(),
            recent_transactions: recent(ledger.transactions(), RECENT_TRANSACTIONS)
                .iter()
                .map(|t| TransactionBrief {
                    kind: t.kind,
                    amount: t.amount,
                    category: t.category.clone(),
                })
                .collect(),
        }
    }
}

/// Render the assistant's system prompt for a snapshot
///
/// Deterministic string rendering: persona rules first, then the user's
/// financial data in a fixed order.
pub fn system_prompt(snapshot: &AdvisorSnapshot) -> String {
    let goals = if snapshot.goals.is_empty() {
        "nenhuma meta cadastrada".to_string()
    } else {
        snapshot
            .goals
            .iter()
            .map(|g| format!("{} ({} de {})", g.name, g.current_amount, g.target_amount))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let transactions = if snapshot.recent_transactions.is_empty() {
        "nenhuma transação registrada".to_string()
    } else {
        snapshot
            .recent_transactions
            .iter()
            .map(|t| format!("{} de {} em {}", t.kind, t.amount, t.category))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Você é a FINA, uma assistente financeira amigável, empática e proativa. \
         Use um tom de conversa leve, motivacional e encorajador, como um coach financeiro.\n\
         \n\
         REGRAS IMPORTANTES:\n\
         - Seja extremamente concisa e use frases curtas.\n\
         - NUNCA escreva parágrafos longos.\n\
         - Use emojis para deixar a conversa mais leve. 👍💸\n\
         - Chame o usuário pelo nome: {name}.\n\
         \n\
         Dados financeiros de {name}:\n\
         - Renda Mensal: {income}\n\
         - Saldo Atual: {balance}\n\
         - Metas: {goals}\n\
         - Últimas Transações: {transactions}\n\
         \n\
         Baseado nesses dados e no histórico da conversa, responda à mensagem \
         do usuário de forma útil e personalizada.",
        name = snapshot.user_name,
        income = snapshot.monthly_income,
        balance = snapshot.current_balance,
        goals = goals,
        transactions = transactions,
    )
}

/// An external advice provider
///
/// Implementations are expected to perform their own I/O, retries, and
/// timeouts; the core only defines the data contract.
pub trait AdviceProvider {
    /// Produce a free-text reply to `message` given the snapshot and the
    /// conversation so far
    fn advise(
        &self,
        snapshot: &AdvisorSnapshot,
        history: &[ChatMessage],
        message: &str,
    ) -> FinaResult<String>;
}

/// Ask the provider for advice, degrading to [`FALLBACK_MESSAGE`] on failure
///
/// Provider failure never propagates into the ledger or the analytics; the
/// caller always gets a displayable string.
pub fn advise_or_fallback<P: AdviceProvider>(
    provider: &P,
    snapshot: &AdvisorSnapshot,
    history: &[ChatMessage],
    message: &str,
) -> String {
    provider
        .advise(snapshot, history, message)
        .unwrap_or_else(|_| FALLBACK_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinaError;
    use crate::models::{Goal, GoalIcon, Transaction};

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new("Ana", Money::from_reais(3000), Money::from_reais(500));
        ledger.create_goal(
            Goal::with_progress(
                "Reserva",
                GoalIcon::Emergency,
                Money::from_reais(200),
                Money::from_reais(1000),
            )
            .unwrap(),
        );
        for i in 1..=7 {
            ledger
                .record_transaction(
                    Transaction::expense(Money::from_reais(i), "Alimentação").unwrap(),
                )
                .unwrap();
        }
        ledger
    }

    struct CannedProvider(FinaResult<String>);

    impl AdviceProvider for CannedProvider {
        fn advise(
            &self,
            _snapshot: &AdvisorSnapshot,
            _history: &[ChatMessage],
            _message: &str,
        ) -> FinaResult<String> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(FinaError::Advisor("provider offline".into())),
            }
        }
    }

    #[test]
    fn test_snapshot_from_ledger() {
        let ledger = sample_ledger();
        let snapshot = AdvisorSnapshot::from_ledger(&ledger);

        assert_eq!(snapshot.user_name, "Ana");
        assert_eq!(snapshot.monthly_income, Money::from_reais(3000));
        assert_eq!(snapshot.goals.len(), 1);
        // Only the last five transactions travel with the snapshot
        assert_eq!(snapshot.recent_transactions.len(), 5);
        assert_eq!(
            snapshot.recent_transactions[0].amount,
            Money::from_reais(3)
        );
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        // Mutating the ledger after taking the snapshot leaves it untouched
        let mut ledger = sample_ledger();
        let snapshot = AdvisorSnapshot::from_ledger(&ledger);
        let balance_at_snapshot = snapshot.current_balance;

        ledger
            .record_transaction(Transaction::expense(Money::from_reais(100), "Lazer").unwrap())
            .unwrap();
        assert_eq!(snapshot.current_balance, balance_at_snapshot);
        assert_ne!(ledger.current_balance(), balance_at_snapshot);
    }

    #[test]
    fn test_system_prompt_content() {
        let ledger = sample_ledger();
        let prompt = system_prompt(&AdvisorSnapshot::from_ledger(&ledger));

        assert!(prompt.contains("Chame o usuário pelo nome: Ana."));
        assert!(prompt.contains("Renda Mensal: R$ 3000,00"));
        assert!(prompt.contains("Reserva (R$ 200,00 de R$ 1000,00)"));
        assert!(prompt.contains("Gasto de R$ 3,00 em Alimentação"));
    }

    #[test]
    fn test_system_prompt_empty_sections() {
        let ledger = Ledger::new("Rui", Money::from_reais(2000), Money::zero());
        let prompt = system_prompt(&AdvisorSnapshot::from_ledger(&ledger));

        assert!(prompt.contains("nenhuma meta cadastrada"));
        assert!(prompt.contains("nenhuma transação registrada"));
    }

    #[test]
    fn test_advise_passthrough() {
        let ledger = sample_ledger();
        let snapshot = AdvisorSnapshot::from_ledger(&ledger);
        let provider = CannedProvider(Ok("Vamos economizar! 💸".to_string()));

        let reply = advise_or_fallback(&provider, &snapshot, &[], "oi");
        assert_eq!(reply, "Vamos economizar! 💸");
    }

    #[test]
    fn test_advise_falls_back_on_failure() {
        let ledger = sample_ledger();
        let snapshot = AdvisorSnapshot::from_ledger(&ledger);
        let provider = CannedProvider(Err(FinaError::Advisor("boom".into())));

        let history = vec![ChatMessage::from_user("oi"), ChatMessage::from_fina("olá!")];
        let reply = advise_or_fallback(&provider, &snapshot, &history, "e agora?");
        assert_eq!(reply, FALLBACK_MESSAGE);
    }
}
