mod get_current_account;

pub use get_current_account::{GetCurrentAccountCommand, GetCurrentAccountUseCase};
