//! Native save dialog backed by rfd.

use outpane_core::export::{parse_filter, SaveFilenamePicker};
use std::path::PathBuf;
use tracing::warn;

/// Opens the platform save dialog.
pub(crate) struct RfdSavePicker;

impl SaveFilenamePicker for RfdSavePicker {
    fn pick_save_filename(
        &mut self,
        suggested: &str,
        extension: &str,
        filter: &str,
    ) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_file_name(suggested);
        match parse_filter(filter) {
            Ok(filters) => {
                for filter in filters {
                    dialog = dialog.add_filter(filter.label, filter.extensions.as_slice());
                }
            }
            Err(err) => {
                warn!("Ignoring save dialog filter: {}", err);
                dialog = dialog.add_filter("Text", &[extension]);
            }
        }
        dialog.save_file()
    }
}
