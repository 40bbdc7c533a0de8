pub mod contacts;

pub use contacts::ContactRowsRepo;
