//! Built-in panes created once the registry is ready.

use outpane_core::constants::PLAIN_TEXT_CONTENT_TYPE;
use outpane_core::{BufferId, BufferRegistry, RegistryListener};

/// Pane receiving debugger session output.
pub(crate) const DEBUGGER_PANE_ID: BufferId =
    BufferId::from_u128(0x8c1f_44a2_0c7d_4b1e_b2f6_5d39_61aa_0e41);
/// Pane receiving messages from the output window itself.
pub(crate) const APPLICATION_PANE_ID: BufferId =
    BufferId::from_u128(0x3e95_7b60_d2c4_4f0a_8e1d_27c6_b9f3_5a12);

const DEBUG_OUTPUT_CONTENT_TYPE: &str = "debug-output";

pub(crate) struct ApplicationLogListener {
    pub(crate) settings_label: String,
}

impl RegistryListener for ApplicationLogListener {
    fn order(&self) -> f64 {
        0.0
    }

    fn initialize(&mut self, registry: &mut BufferRegistry) {
        let pane =
            registry.get_or_create(APPLICATION_PANE_ID, "Application", PLAIN_TEXT_CONTENT_TYPE);
        pane.write_line(&format!("outpane {}", env!("CARGO_PKG_VERSION")));
        pane.write_line(&format!("Settings: {}", self.settings_label));
    }
}

pub(crate) struct DebuggerOutputListener;

impl RegistryListener for DebuggerOutputListener {
    fn order(&self) -> f64 {
        100.0
    }

    fn initialize(&mut self, registry: &mut BufferRegistry) {
        registry
            .get_or_create(DEBUGGER_PANE_ID, "Debugger", DEBUG_OUTPUT_CONTENT_TYPE)
            .write_line("No debug session attached.");
    }
}

/// Listeners for the panes every output window starts with.
pub(crate) fn builtin_listeners(settings_label: String) -> Vec<Box<dyn RegistryListener>> {
    vec![
        Box::new(DebuggerOutputListener),
        Box::new(ApplicationLogListener { settings_label }),
    ]
}
