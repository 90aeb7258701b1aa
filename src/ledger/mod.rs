//! The ledger aggregate
//!
//! [`Ledger`] is the single source of truth: it owns the transaction log,
//! the goal set, the user's profile fields, and the cached running balance.
//! All mutation goes through its operations; every analytic component only
//! ever reads from it through `&`-returning accessors, so no external code
//! can break the balance/log consistency.
//!
//! The ledger lives for one session. It is built once from onboarding input
//! and never persisted (only the small [`crate::config::Settings`] file
//! survives across sessions).

use crate::error::{FinaError, FinaResult};
use crate::models::{Goal, GoalId, Money, Transaction};

/// The owning aggregate of transactions, goals, balance, and profile fields
#[derive(Debug, Clone)]
pub struct Ledger {
    user_name: String,
    monthly_income: Money,
    current_balance: Money,
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
}

impl Ledger {
    /// Create a ledger from onboarding input, with no goals yet
    pub fn new(
        user_name: impl Into<String>,
        monthly_income: Money,
        starting_balance: Money,
    ) -> Self {
        Self::with_goals(user_name, monthly_income, starting_balance, Vec::new())
    }

    /// Create a ledger from onboarding input with an initial goal set
    pub fn with_goals(
        user_name: impl Into<String>,
        monthly_income: Money,
        starting_balance: Money,
        goals: Vec<Goal>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            monthly_income,
            current_balance: starting_balance,
            transactions: Vec::new(),
            goals,
        }
    }

    /// The user's display name
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Monthly income declared at onboarding
    pub fn monthly_income(&self) -> Money {
        self.monthly_income
    }

    /// The cached balance, updated in lock-step with the transaction log
    pub fn current_balance(&self) -> Money {
        self.current_balance
    }

    /// The transaction log, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The goal set, in creation order
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Look up a goal by id
    pub fn find_goal(&self, goal_id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    /// Append a transaction to the log and apply it to the balance
    ///
    /// Income adds to the balance, expense subtracts. The log and the cached
    /// balance change together; a failed call leaves both untouched. Zero
    /// amounts are accepted.
    pub fn record_transaction(&mut self, transaction: Transaction) -> FinaResult<()> {
        if transaction.amount.is_negative() {
            return Err(FinaError::negative_amount(transaction.amount));
        }
        self.current_balance += transaction.signed_amount();
        self.transactions.push(transaction);
        Ok(())
    }

    /// Add a new goal, returning its id
    pub fn create_goal(&mut self, goal: Goal) -> GoalId {
        let id = goal.id;
        self.goals.push(goal);
        id
    }

    /// Add money to a goal
    ///
    /// Contributions must be strictly positive; goals only grow. Returns the
    /// goal's updated amount. On error the goal set is unchanged.
    pub fn contribute_to_goal(&mut self, goal_id: GoalId, added: Money) -> FinaResult<Money> {
        if !added.is_positive() {
            return Err(FinaError::non_positive_amount(added));
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| FinaError::goal_not_found(goal_id.to_string()))?;
        goal.current_amount += added;
        Ok(goal.current_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalIcon;

    fn test_ledger() -> Ledger {
        Ledger::new("Ana", Money::from_reais(3000), Money::from_reais(500))
    }

    #[test]
    fn test_new_ledger() {
        let ledger = test_ledger();
        assert_eq!(ledger.user_name(), "Ana");
        assert_eq!(ledger.monthly_income(), Money::from_reais(3000));
        assert_eq!(ledger.current_balance(), Money::from_reais(500));
        assert!(ledger.transactions().is_empty());
        assert!(ledger.goals().is_empty());
    }

    #[test]
    fn test_record_income_and_expense() {
        let mut ledger = test_ledger();

        ledger
            .record_transaction(
                Transaction::income(Money::from_reais(200), Some("Extra".into())).unwrap(),
            )
            .unwrap();
        assert_eq!(ledger.current_balance(), Money::from_reais(700));

        ledger
            .record_transaction(Transaction::expense(Money::from_reais(80), "Alimentação").unwrap())
            .unwrap();
        assert_eq!(ledger.current_balance(), Money::from_reais(620));
        assert_eq!(ledger.transactions().len(), 2);
    }

    #[test]
    fn test_balance_invariant() {
        // After any sequence of records, balance == initial + Σincome − Σexpense
        let mut ledger = test_ledger();
        let initial = ledger.current_balance();

        let entries: [(bool, i64); 6] =
            [(true, 1000), (false, 250), (false, 0), (true, 35), (false, 999), (true, 12345)];
        for (is_income, cents) in entries {
            let txn = if is_income {
                Transaction::income(Money::from_cents(cents), None).unwrap()
            } else {
                Transaction::expense(Money::from_cents(cents), "Outros").unwrap()
            };
            ledger.record_transaction(txn).unwrap();
        }

        let income: Money = ledger
            .transactions()
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let expense: Money = ledger
            .transactions()
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();
        assert_eq!(ledger.current_balance(), initial + income - expense);
    }

    #[test]
    fn test_zero_amount_transaction_accepted() {
        let mut ledger = test_ledger();
        let before = ledger.current_balance();
        ledger
            .record_transaction(Transaction::expense(Money::zero(), "Outros").unwrap())
            .unwrap();
        assert_eq!(ledger.current_balance(), before);
        assert_eq!(ledger.transactions().len(), 1);
    }

    #[test]
    fn test_create_goal_and_lookup() {
        let mut ledger = test_ledger();
        let goal = Goal::new("Reserva", GoalIcon::Emergency, Money::from_reais(1000)).unwrap();
        let id = ledger.create_goal(goal);

        let found = ledger.find_goal(id).unwrap();
        assert_eq!(found.name, "Reserva");
        assert!(ledger.find_goal(GoalId::new()).is_none());
    }

    #[test]
    fn test_contribute_to_goal() {
        let mut ledger = test_ledger();
        let id = ledger.create_goal(
            Goal::new("Viagem", GoalIcon::Travel, Money::from_reais(2000)).unwrap(),
        );

        let updated = ledger
            .contribute_to_goal(id, Money::from_reais(150))
            .unwrap();
        assert_eq!(updated, Money::from_reais(150));
        assert_eq!(
            ledger.find_goal(id).unwrap().current_amount,
            Money::from_reais(150)
        );

        // Strictly increasing across repeated contributions
        let updated = ledger
            .contribute_to_goal(id, Money::from_cents(1))
            .unwrap();
        assert_eq!(updated, Money::from_cents(15001));
    }

    #[test]
    fn test_contribute_non_positive_rejected() {
        let mut ledger = test_ledger();
        let id = ledger.create_goal(
            Goal::new("Viagem", GoalIcon::Travel, Money::from_reais(2000)).unwrap(),
        );

        let err = ledger.contribute_to_goal(id, Money::zero()).unwrap_err();
        assert!(err.is_invalid_amount());
        let err = ledger
            .contribute_to_goal(id, Money::from_cents(-100))
            .unwrap_err();
        assert!(err.is_invalid_amount());

        // State unchanged on rejection
        assert!(ledger.find_goal(id).unwrap().current_amount.is_zero());
    }

    #[test]
    fn test_contribute_unknown_goal() {
        let mut ledger = test_ledger();
        let err = ledger
            .contribute_to_goal(GoalId::new(), Money::from_reais(10))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_contribution_may_exceed_target() {
        let mut ledger = test_ledger();
        let id = ledger.create_goal(
            Goal::new("Reserva", GoalIcon::Emergency, Money::from_reais(100)).unwrap(),
        );
        ledger
            .contribute_to_goal(id, Money::from_reais(150))
            .unwrap();
        assert_eq!(
            ledger.find_goal(id).unwrap().current_amount,
            Money::from_reais(150)
        );
    }

    #[test]
    fn test_initial_goal_set() {
        let goals = vec![
            Goal::new("Reserva", GoalIcon::Emergency, Money::from_reais(1000)).unwrap(),
            Goal::new("Viagem", GoalIcon::Travel, Money::from_reais(2000)).unwrap(),
        ];
        let ledger =
            Ledger::with_goals("Rui", Money::from_reais(2500), Money::zero(), goals);
        assert_eq!(ledger.goals().len(), 2);
    }
}
