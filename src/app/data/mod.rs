use crate::error::DataError;

pub mod file;
pub mod memory;

pub use file::FileDataManager;
pub use memory::MemoryDataManager;

/// Storage for the best score, which outlives a single session.
pub trait DataManager: Send {
    fn load_best_score(&mut self) -> Result<u64, DataError>;

    fn save_best_score(&mut self, score: u64) -> Result<(), DataError>;
}

impl<T: DataManager + ?Sized> DataManager for Box<T> {
    fn load_best_score(&mut self) -> Result<u64, DataError> {
        (**self).load_best_score()
    }

    fn save_best_score(&mut self, score: u64) -> Result<(), DataError> {
        (**self).save_best_score(score)
    }
}
