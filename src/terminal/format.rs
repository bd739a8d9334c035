//! Text layouts for terminal command output.

use rand::Rng;

use crate::content::{
    TimelineItem, ASCII_ANYA, ASCII_ART, ASCII_TEXT, PROFILE, PROJECTS, SKILLS, SOCIAL_LINKS,
};
use crate::mail::MailOutcome;
use crate::theme::Theme;

use super::commands::COMMAND_SPECS;

pub const MATRIX_ROWS: usize = 16;
pub const MATRIX_WIDTH: usize = 48;
const SKILLS_PER_LINE: usize = 3;

pub const SENDMAIL_USAGE: &str = r#"  sendmail name="John Doe" email=john@doe.com message="Hello""#;

/// Three-line section header: bar, indented title, bar.
pub fn header(title: &str) -> Vec<String> {
    let bar = "-".repeat((title.chars().count() + 6).max(8));
    vec![bar.clone(), format!("  {title}"), bar]
}

fn with_header(title: &str, body: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut lines = header(title);
    lines.extend(body);
    lines
}

pub fn timeline(items: &[TimelineItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| {
            [
                format!("{}  {}", item.period, item.title),
                format!("  {}", item.description),
            ]
        })
        .collect()
}

pub fn skills() -> Vec<String> {
    let labels: Vec<&str> = SKILLS.iter().map(|s| s.label).collect();
    let mut lines = vec!["Skills:".to_string()];
    lines.extend(labels.chunks(SKILLS_PER_LINE).map(|chunk| {
        chunk
            .iter()
            .map(|s| format!(" - {s}"))
            .collect::<Vec<_>>()
            .join("\t")
    }));
    lines
}

pub fn projects() -> Vec<String> {
    let mut lines = header("Projects");
    for (idx, p) in PROJECTS.iter().enumerate() {
        lines.push(format!("{}. {}", idx + 1, p.title));
        lines.push(format!("   {}", p.description));
        if !p.tags.is_empty() {
            lines.push(format!("   [{}]", p.tags.join(", ")));
        }
        if let Some(url) = p.github_url {
            lines.push(format!("   repo: {url}"));
        }
    }
    lines
}

pub fn about() -> Vec<String> {
    with_header(
        "About",
        [
            format!("{} - {}", PROFILE.name, PROFILE.role),
            String::new(),
            PROFILE.summary_one.to_string(),
            PROFILE.summary_two.to_string(),
        ],
    )
}

pub fn help() -> Vec<String> {
    let width = COMMAND_SPECS
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);
    with_header(
        "Available commands",
        COMMAND_SPECS
            .iter()
            .map(|c| format!(" - {:<width$}:  {}", c.name, c.description)),
    )
}

/// ASCII text lines padded to a common width, followed by the art.
pub fn banner() -> Vec<String> {
    let width = ASCII_TEXT
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let text = ASCII_TEXT.lines().map(|l| format!("{l:<width$}"));
    let art = ASCII_ART.lines().map(str::to_string);
    with_header("Banner", text.chain(art))
}

pub fn anya() -> Vec<String> {
    with_header(
        "Anya",
        ASCII_ANYA.lines().map(str::to_string).chain([
            String::new(),
            String::new(),
            "Spy... Mission... Waku waku *-*".to_string(),
            "https://www.youtube.com/watch?v=xinO1fkYVhk".to_string(),
        ]),
    )
}

pub fn neofetch(theme: Theme) -> Vec<String> {
    with_header(
        "Neofetch",
        [
            format!("User: {}", PROFILE.name),
            format!("Role: {}", PROFILE.role),
            format!("Theme: {theme}"),
            format!("Projects: {}", PROJECTS.len()),
            format!("Skills: {}", SKILLS.len()),
        ],
    )
}

pub fn matrix<R: Rng + ?Sized>(rng: &mut R, rows: usize, width: usize) -> Vec<String> {
    with_header(
        "Matrix",
        (0..rows).map(|_| {
            (0..width)
                .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
                .collect::<String>()
        }),
    )
}

pub fn whoami() -> Vec<String> {
    with_header(
        "whoami",
        [PROFILE.name.to_string(), PROFILE.role.to_string()],
    )
}

pub fn resume() -> Vec<String> {
    with_header("Resume", [PROFILE.resume_path.to_string()])
}

pub fn contact() -> Vec<String> {
    with_header(
        "Contact",
        std::iter::once(
            "Use the Contact section on the homepage or DM via social links.".to_string(),
        )
        .chain(
            SOCIAL_LINKS
                .iter()
                .map(|l| format!("  {}: {}", l.label, l.url)),
        )
        .chain(std::iter::once(
            "Or from here: sendmail name=... email=... message=...".to_string(),
        )),
    )
}

pub fn sudo() -> Vec<String> {
    with_header(
        "sudo",
        [
            "Permission denied: this is a personal terminal.".to_string(),
            "Hint: try 'help' or 'neofetch'.".to_string(),
        ],
    )
}

pub fn theme_set(theme: Theme) -> Vec<String> {
    with_header("Theme", [format!("Set theme to {theme}.")])
}

pub fn theme_toggled(now: Theme) -> Vec<String> {
    with_header(
        "Theme",
        [
            format!("Toggled theme. Current: {now}."),
            "Usage: theme [light|dark]".to_string(),
        ],
    )
}

pub fn not_found(verb: &str) -> Vec<String> {
    vec![format!(
        "Command not found: {verb}. Type 'help' for a list of commands."
    )]
}

pub fn sendmail_usage() -> Vec<String> {
    with_header(
        "Send Mail",
        ["Usage:".to_string(), SENDMAIL_USAGE.to_string()],
    )
}

pub fn sendmail_unconfigured() -> Vec<String> {
    with_header(
        "Send Mail",
        ["Error: missing FOLIO_ACCESS_KEY in env.".to_string()],
    )
}

pub fn sendmail_status(name: &str, email: &str, message: &str) -> Vec<String> {
    with_header(
        "Send Mail",
        [
            format!("From: {name} <{email}>"),
            format!("Message: {message}"),
            "Sending...".to_string(),
        ],
    )
}

pub fn mail_outcome(outcome: &MailOutcome) -> Vec<String> {
    let line = match outcome {
        MailOutcome::Sent => "Success: message sent.".to_string(),
        MailOutcome::Rejected(Some(msg)) => format!("Error: {msg}"),
        MailOutcome::Rejected(None) => "Error: Unknown error from Web3Forms".to_string(),
        MailOutcome::Unconfigured => "Error: missing FOLIO_ACCESS_KEY in env.".to_string(),
        MailOutcome::Network(_) => "Network error. Please try again.".to_string(),
    };
    vec![line]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_header_min_width() {
        assert_eq!(header("ab"), vec!["--------", "  ab", "--------"]);
        assert_eq!(header("Projects")[0].len(), 14);
    }

    #[test]
    fn test_timeline_two_lines_per_item() {
        let lines = timeline(crate::content::EXPERIENCE_ITEMS);
        assert_eq!(lines.len(), crate::content::EXPERIENCE_ITEMS.len() * 2);
        assert!(lines[1].starts_with("  "));
    }

    #[test]
    fn test_skills_three_per_line() {
        let lines = skills();
        assert_eq!(lines[0], "Skills:");
        assert_eq!(lines.len(), 1 + SKILLS.len().div_ceil(SKILLS_PER_LINE));
        assert_eq!(lines[1], " - HTML\t - CSS\t - Tailwind");
    }

    #[test]
    fn test_projects_numbered_with_repo() {
        let lines = projects();
        assert!(lines.iter().any(|l| l == "1. Task Manager RESTful API"));
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("   repo: ")).count(),
            PROJECTS.len()
        );
    }

    #[test]
    fn test_banner_text_lines_padded_equally() {
        let lines = banner();
        let text_rows = ASCII_TEXT.lines().count();
        let widths: Vec<usize> = lines[3..3 + text_rows]
            .iter()
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_matrix_shape_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let lines = matrix(&mut rng, 4, 10);
        assert_eq!(lines.len(), 3 + 4);
        for row in &lines[3..] {
            assert_eq!(row.len(), 10);
            assert!(row.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn test_mail_outcome_prefers_provider_message() {
        assert_eq!(
            mail_outcome(&MailOutcome::Rejected(Some("Invalid key".into()))),
            vec!["Error: Invalid key"]
        );
        assert_eq!(
            mail_outcome(&MailOutcome::Rejected(None)),
            vec!["Error: Unknown error from Web3Forms"]
        );
        assert_eq!(
            mail_outcome(&MailOutcome::Network("timeout".into())),
            vec!["Network error. Please try again."]
        );
    }
}
