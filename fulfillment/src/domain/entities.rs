// Conversation turn inputs and the replies the webhook produces.

/// Webhook handlers configured on the conversational platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Welcome,
    Fallback,
    ChangeColor,
    StartSpin,
    StopSpin,
    Instructions,
    Restart,
}

impl Handler {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "welcome" => Some(Handler::Welcome),
            "fallback" => Some(Handler::Fallback),
            "change_color" => Some(Handler::ChangeColor),
            "start_spin" => Some(Handler::StartSpin),
            "stop_spin" => Some(Handler::StopSpin),
            "instructions" => Some(Handler::Instructions),
            "restart" => Some(Handler::Restart),
            _ => None,
        }
    }
}

/// One resolved conversation turn.
#[derive(Debug, Clone, Default)]
pub struct Turn {
    pub handler_name: String,
    // Resolved value of the `color` intent parameter, if any.
    pub color: Option<String>,
    pub capabilities: Vec<String>,
}

/// Commands carried to the canvas in a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasCommand {
    Tint { tint: u32 },
    Spin { spin: bool },
    RestartGame,
}

/// Canvas part of a reply. An empty directive keeps the canvas open without changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanvasDirective {
    pub url: Option<String>,
    pub data: Vec<CanvasCommand>,
    pub enable_full_screen: bool,
    pub continue_tts_during_touch: bool,
}

impl CanvasDirective {
    pub fn command(command: CanvasCommand) -> Self {
        Self {
            data: vec![command],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub speech: String,
    pub canvas: Option<CanvasDirective>,
    // Scene transition requested from the platform.
    pub next_scene: Option<String>,
}
