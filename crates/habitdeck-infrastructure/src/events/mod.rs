mod bus;

pub use bus::InProcessEventBus;
