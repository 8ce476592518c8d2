//! Custom widgets for the advice card

mod advice_card;
mod dice_button;
mod divider;
mod key_hints;

pub use advice_card::AdviceCard;
pub use dice_button::DiceButton;
pub use divider::Divider;
pub use key_hints::KeyHints;
