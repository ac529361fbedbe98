mod local;

pub use local::LocalNotificationSender;
