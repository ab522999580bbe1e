//! Holiday storage.
//!
//! [`HolidayRepository`] is the storage port, [`InMemoryHolidayRepository`]
//! the bundled backend, and [`HolidayService`] applies the holiday rules on
//! top of any backend.

mod memory;
mod repository;
mod service;

pub use memory::InMemoryHolidayRepository;
pub use repository::HolidayRepository;
pub use service::HolidayService;
