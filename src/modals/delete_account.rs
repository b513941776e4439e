//! Delete-account confirmation
//!
//! Asks for the current password and forwards it to the backend. On
//! success the local cache and token are dropped.

use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::context::FinanceContext;
use crate::error::{FinanceError, FinanceResult};
use crate::notify::Notification;

#[derive(Default)]
pub struct DeleteAccountModal {
    password: Zeroizing<String>,
    open: bool,
    error_message: Option<String>,
}

impl DeleteAccountModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.password = Zeroizing::new(String::new());
        self.error_message = None;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.password = Zeroizing::new(String::new());
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Zeroizing::new(password.into());
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub async fn confirm(&mut self, ctx: &FinanceContext) -> FinanceResult<()> {
        self.error_message = None;
        if self.password.is_empty() {
            let msg = "Password is required to delete your account".to_string();
            ctx.notifier().notify(Notification::error(msg.clone()));
            self.error_message = Some(msg.clone());
            return Err(FinanceError::Validation(msg));
        }

        let response = ctx.api().delete_account(&self.password).await;
        match response.into_result() {
            Ok(_) => {
                info!("account deleted");
                ctx.reset();
                ctx.api().session().set_token(None);
                ctx.notifier()
                    .notify(Notification::success("Your account has been deleted"));
                self.close();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "account deletion failed");
                ctx.notifier()
                    .notify(Notification::error(format!("Failed to delete account: {}", err)));
                self.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }
}
