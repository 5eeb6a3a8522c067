use crate::enums::region::Region;
use crate::traits::user_notifier::UserNotifier;

/// Alerts go to stderr; regions are printed by the caller once the
/// operation settles, so revealing only logs.
pub struct ConsoleNotifier;

impl UserNotifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("\r\x1b[K⚠️  {}", message);
    }

    fn reveal(&self, region: Region) {
        log::debug!("Revealing {:?}", region);
    }
}
