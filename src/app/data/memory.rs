use crate::error::DataError;

use super::DataManager;

/// In-process store; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryDataManager {
    pub best_score: u64,
    pub saves: usize,
}

impl MemoryDataManager {
    pub fn new(best_score: u64) -> Self {
        Self {
            best_score,
            saves: 0,
        }
    }
}

impl DataManager for MemoryDataManager {
    fn load_best_score(&mut self) -> Result<u64, DataError> {
        Ok(self.best_score)
    }

    fn save_best_score(&mut self, score: u64) -> Result<(), DataError> {
        self.best_score = score;
        self.saves += 1;
        Ok(())
    }
}
