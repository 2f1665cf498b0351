pub mod buy_tokens;
pub mod cancel_campaign;
pub mod claim_refund;
pub mod create_campaign;
pub mod initialize;
pub mod promote_campaign;
pub mod update_platform_fee;
pub mod views;
pub mod withdraw_remaining_tokens;

pub use buy_tokens::*;
pub use cancel_campaign::*;
pub use claim_refund::*;
pub use create_campaign::*;
pub use initialize::*;
pub use promote_campaign::*;
pub use update_platform_fee::*;
pub use views::*;
pub use withdraw_remaining_tokens::*;
