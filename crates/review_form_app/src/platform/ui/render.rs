use review_form_core::FormViewModel;

use crate::platform::ViewCommand;

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &FormViewModel) -> Vec<ViewCommand> {
    let mut cmds = Vec::new();

    cmds.push(ViewCommand::SetCharCount {
        text: view.char_count_text.clone(),
        color_var: view.count_tier.css_var(),
    });

    cmds.push(ViewCommand::SetInputHeight {
        px: view.input_height_px,
    });

    cmds.push(ViewCommand::SetSubmitState {
        enabled: view.submit_enabled,
        opacity: view.submit_opacity.as_css(),
    });

    cmds.push(ViewCommand::SetSubmitLabel {
        icon: view.submit_label.icon(),
        text: view.submit_label.text(),
        loading: view.results_loading,
    });

    cmds.push(ViewCommand::SetResultsLoading {
        loading: view.results_loading,
    });

    cmds.push(ViewCommand::SetNotification(view.notification.clone()));

    cmds
}
