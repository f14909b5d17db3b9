//! Static registries: games, achievements, skins and the rules that unlock them.

mod achievements;
mod checker;
mod games;
mod skins;

pub use achievements::{Achievement, AchievementId, AchievementScope, ACHIEVEMENTS};
pub use checker::{check_play_milestones, check_win_achievements};
pub use games::{GameId, SkinTarget};
pub use skins::{Skin, SKINS};
