use crate::enums::region::Region;

/// Front-end hooks a controller cannot express as view state.
#[cfg_attr(test, mockall::automock)]
pub trait UserNotifier: Send + Sync {
    /// Blocking, user-facing message.
    fn alert(&self, message: &str);

    fn reveal(&self, region: Region);
}
