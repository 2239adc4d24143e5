mod seed_calendar;

pub use seed_calendar::SeedCalendarUseCase;
