use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// A prepared layout places itself, which lets fixed boards be replayed through a [`Game`].
impl MineGenerator for MineLayout {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        if self.size() != config.size || self.mine_count() != config.mines {
            log::warn!(
                "Fixed layout {:?} with {} mines does not match configuration {:?}",
                self.size(),
                self.mine_count(),
                config
            );
            return Err(GameError::LayoutMismatch);
        }
        Ok(self)
    }
}
