//! New-user / needs-setup heuristic

/// How many records of each kind the user has
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupCounts {
    pub bank_accounts: usize,
    pub credit_cards: usize,
    pub debit_cards: usize,
    pub categories: usize,
    pub transactions: usize,
    pub investments: usize,
    pub budgets: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupStatus {
    /// Nothing has been recorded yet
    pub is_new_user: bool,
    /// New user, or nothing to hang transactions on (no account, no category)
    pub needs_setup: bool,
}

impl SetupStatus {
    pub fn derive(counts: &SetupCounts) -> Self {
        let is_new_user = counts.bank_accounts == 0
            && counts.credit_cards == 0
            && counts.debit_cards == 0
            && counts.categories == 0
            && counts.transactions == 0
            && counts.investments == 0
            && counts.budgets == 0;
        let needs_setup = is_new_user || (counts.bank_accounts == 0 && counts.categories == 0);
        Self {
            is_new_user,
            needs_setup,
        }
    }

    /// Suggested next steps for the user, in order
    pub fn checklist(counts: &SetupCounts) -> Vec<&'static str> {
        let mut steps = Vec::new();
        if counts.bank_accounts == 0 {
            steps.push("Add a bank account: fintrack account add");
        }
        if counts.categories == 0 {
            steps.push("Create categories: fintrack category add (or fintrack setup --defaults)");
        }
        if counts.budgets == 0 {
            steps.push("Set a monthly budget: fintrack budget add");
        }
        if counts.transactions == 0 {
            steps.push("Record a transaction: fintrack transaction add");
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_user_needs_setup() {
        let status = SetupStatus::derive(&SetupCounts::default());
        assert!(status.is_new_user);
        assert!(status.needs_setup);
    }

    #[test]
    fn test_account_or_category_completes_setup() {
        let with_account = SetupCounts {
            bank_accounts: 1,
            ..Default::default()
        };
        let status = SetupStatus::derive(&with_account);
        assert!(!status.is_new_user);
        assert!(!status.needs_setup);

        let with_category = SetupCounts {
            categories: 3,
            ..Default::default()
        };
        assert!(!SetupStatus::derive(&with_category).needs_setup);
    }

    #[test]
    fn test_transactions_alone_still_need_setup() {
        let counts = SetupCounts {
            transactions: 4,
            credit_cards: 1,
            ..Default::default()
        };
        let status = SetupStatus::derive(&counts);
        assert!(!status.is_new_user);
        assert!(status.needs_setup);
        assert_eq!(SetupStatus::checklist(&counts).len(), 3);
    }
}
