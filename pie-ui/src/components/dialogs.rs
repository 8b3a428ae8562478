use pie_core::InputError;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::debug;

/// Shows each warning as its own blocking dialog, in order.
pub fn show_warnings(warnings: &[InputError]) {
    for warning in warnings {
        show_warning(warning);
    }
}

/// Shows a blocking warning dialog with an OK button.
pub fn show_warning(warning: &InputError) {
    debug!(title = warning.title(), %warning, "showing warning dialog");

    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(warning.title())
        .set_description(warning.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}
