//! The closed set of terminal commands.
//!
//! Each verb maps to exactly one `CommandSpec` entry and one arm in
//! [`execute`]. Handlers are pure: they read the [`CommandContext`] and
//! return lines plus at most one [`Effect`] for the interpreter to apply.

use crate::content::{EDUCATION_ITEMS, EXPERIENCE_ITEMS};
use crate::mail::MailRequest;
use crate::theme::Theme;

use super::args;
use super::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Help,
    Home,
    About,
    Experience,
    Education,
    Skills,
    Projects,
    Resume,
    Contact,
    Sendmail,
    Theme,
    Whoami,
    Neofetch,
    Matrix,
    Banner,
    Anya,
    Sudo,
    Clear,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub verb: Verb,
    pub name: &'static str,
    pub description: &'static str,
}

const fn spec(verb: Verb, name: &'static str, description: &'static str) -> CommandSpec {
    CommandSpec {
        verb,
        name,
        description,
    }
}

/// Registry in `help` order.
pub const COMMAND_SPECS: &[CommandSpec] = &[
    spec(Verb::Help, "help", "show this help"),
    spec(Verb::Home, "home", "go back to the homepage"),
    spec(Verb::About, "about", "about me"),
    spec(Verb::Experience, "experience", "work experience"),
    spec(Verb::Education, "education", "education"),
    spec(Verb::Skills, "skills", "technical skills"),
    spec(Verb::Projects, "projects", "list projects"),
    spec(Verb::Resume, "resume", "resume link"),
    spec(Verb::Contact, "contact", "how to reach me"),
    spec(
        Verb::Sendmail,
        "sendmail",
        r#"send email via Web3Forms: sendmail name="John Doe" email=john@doe.com message="Hello""#,
    ),
    spec(Verb::Theme, "theme", "toggle or set theme [light|dark]"),
    spec(Verb::Whoami, "whoami", "print current user"),
    spec(Verb::Neofetch, "neofetch", "show fancy system/profile info"),
    spec(Verb::Matrix, "matrix", "matrix rain (for fun)"),
    spec(Verb::Banner, "banner", "show the banner art"),
    spec(Verb::Anya, "anya", "Anyaaaaaa"),
    spec(Verb::Sudo, "sudo", "try your luck"),
    spec(Verb::Clear, "clear", "clear the screen"),
];

impl Verb {
    /// Exact, case-sensitive lookup.
    pub fn lookup(name: &str) -> Option<Self> {
        COMMAND_SPECS
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.verb)
    }

    pub fn name(self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Home => "home",
            Verb::About => "about",
            Verb::Experience => "experience",
            Verb::Education => "education",
            Verb::Skills => "skills",
            Verb::Projects => "projects",
            Verb::Resume => "resume",
            Verb::Contact => "contact",
            Verb::Sendmail => "sendmail",
            Verb::Theme => "theme",
            Verb::Whoami => "whoami",
            Verb::Neofetch => "neofetch",
            Verb::Matrix => "matrix",
            Verb::Banner => "banner",
            Verb::Anya => "anya",
            Verb::Sudo => "sudo",
            Verb::Clear => "clear",
        }
    }
}

/// Top-level views a command can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(Route),
    SetTheme(Theme),
    ToggleTheme,
    ClearHistory,
    SendMail(MailRequest),
}

/// Rendering hint attached to an output entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleHint {
    /// Dense ASCII art, drawn dimmed.
    Compact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub effect: Option<Effect>,
    pub style: Option<StyleHint>,
}

impl Outcome {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    fn with_effect(lines: Vec<String>, effect: Effect) -> Self {
        Self {
            lines,
            effect: Some(effect),
            style: None,
        }
    }
}

/// Read-only state a handler may consult.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub theme: Theme,
    pub mail_configured: bool,
}

/// Run `verb` with the text that followed it on the command line.
pub fn execute(verb: Verb, rest: &str, ctx: &CommandContext) -> Outcome {
    match verb {
        Verb::Help => Outcome::lines(format::help()),
        Verb::Home => Outcome::with_effect(
            vec!["Navigating to homepage...".to_string()],
            Effect::Navigate(Route::Home),
        ),
        Verb::About => Outcome::lines(format::about()),
        Verb::Experience => {
            let mut lines = format::header("Experience");
            lines.extend(format::timeline(EXPERIENCE_ITEMS));
            Outcome::lines(lines)
        }
        Verb::Education => {
            let mut lines = format::header("Education");
            lines.extend(format::timeline(EDUCATION_ITEMS));
            Outcome::lines(lines)
        }
        Verb::Skills => Outcome::lines(format::skills()),
        Verb::Projects => Outcome::lines(format::projects()),
        Verb::Resume => Outcome::lines(format::resume()),
        Verb::Contact => Outcome::lines(format::contact()),
        Verb::Sendmail => sendmail(rest, ctx),
        Verb::Theme => theme(rest, ctx),
        Verb::Whoami => Outcome::lines(format::whoami()),
        Verb::Neofetch => Outcome::lines(format::neofetch(ctx.theme)),
        Verb::Matrix => Outcome::lines(format::matrix(
            &mut rand::rng(),
            format::MATRIX_ROWS,
            format::MATRIX_WIDTH,
        )),
        Verb::Banner => Outcome::lines(format::banner()),
        Verb::Anya => Outcome {
            lines: format::anya(),
            effect: None,
            style: Some(StyleHint::Compact),
        },
        Verb::Sudo => Outcome::lines(format::sudo()),
        Verb::Clear => Outcome::with_effect(Vec::new(), Effect::ClearHistory),
    }
}

fn theme(rest: &str, ctx: &CommandContext) -> Outcome {
    let requested = rest
        .split_whitespace()
        .next()
        .and_then(|arg| arg.parse::<Theme>().ok());
    match requested {
        Some(theme) => Outcome::with_effect(format::theme_set(theme), Effect::SetTheme(theme)),
        None => Outcome::with_effect(
            format::theme_toggled(ctx.theme.toggled()),
            Effect::ToggleTheme,
        ),
    }
}

fn sendmail(rest: &str, ctx: &CommandContext) -> Outcome {
    if !ctx.mail_configured {
        return Outcome::lines(format::sendmail_unconfigured());
    }
    let parsed = args::parse(rest);
    let (Some(name), Some(email), Some(message)) = (parsed.name, parsed.email, parsed.message)
    else {
        return Outcome::lines(format::sendmail_usage());
    };
    Outcome::with_effect(
        format::sendmail_status(&name, &email, &message),
        Effect::SendMail(MailRequest::new(name, email, message)),
    )
}
