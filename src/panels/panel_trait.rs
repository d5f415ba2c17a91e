use egui::Ui;

#[derive(Debug, Clone, Default)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: Option<&'static str>,
    pub visible: bool,
    pub detached: bool,
    pub request_focus: bool,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon: Some(icon),
            visible: true,
            ..Default::default()
        }
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    fn icon_only(&self) -> Option<&'static str> {
        self.state().icon
    }

    fn title_and_icon(&self) -> String {
        match self.icon_only() {
            Some(icon) => format!("{icon} {}", self.title()),
            None => self.title().to_string(),
        }
    }

    // Optional hooks with default empty impls
    fn render_menu(&mut self, _ui: &mut Ui) {}
    fn render_panel(&mut self, _ui: &mut Ui) {}
}
