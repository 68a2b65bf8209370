//! Shell Commands
//!
//! Line commands understood by the reader shell and their text rendering.

use std::fmt::Write as _;

use blog_core::{BlogError, BlogSession, PageItem, PostDraft};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Category(String),
    Clear,
    Page(i64),
    Next,
    Prev,
    View(String),
    Back,
    Theme,
    Add(PostDraft),
    List,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. `None` for blank or unknown input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "search" => Some(Self::Search(rest.to_string())),
            "category" => Some(Self::Category(if rest.is_empty() { "all".into() } else { rest.to_string() })),
            "clear" => Some(Self::Clear),
            "page" => rest.parse().ok().map(Self::Page),
            "next" => Some(Self::Next),
            "prev" => Some(Self::Prev),
            "view" if !rest.is_empty() => Some(Self::View(rest.to_string())),
            "back" => Some(Self::Back),
            "theme" => Some(Self::Theme),
            "add" => Some(Self::Add(parse_draft(rest))),
            "list" => Some(Self::List),
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// `title|category|content`, missing parts left blank for validation to catch
fn parse_draft(spec: &str) -> PostDraft {
    let mut parts = spec.splitn(3, '|').map(str::trim);
    let title = parts.next().unwrap_or_default();
    let category = parts.next().unwrap_or_default();
    let content = parts.next().unwrap_or_default().replace("\\n", "\n");
    PostDraft::new(title, content, category)
}

pub const HELP: &str = "\
commands:
  search <term>                  filter by title or content
  category <name|all>            filter by category
  clear                          reset search
  page <n> | next | prev         change page
  view <id> | back               open a post / return to the list
  add <title>|<category>|<text>  create a post
  theme                          toggle dark mode
  list                           show the current page
  quit";

/// Run a command against the session and render its output
pub fn execute(session: &mut BlogSession, command: Command) -> Result<String, BlogError> {
    let out = match command {
        Command::Search(term) => {
            session.set_term(&term);
            render_list(session)
        }
        Command::Category(category) => {
            session.set_category(&category);
            render_list(session)
        }
        Command::Clear => {
            session.clear_search();
            render_list(session)
        }
        Command::Page(n) => {
            session.change_page(n);
            render_list(session)
        }
        Command::Next => match session.next_page() {
            Some(_) => render_list(session),
            None => "Already on the last page".to_string(),
        },
        Command::Prev => match session.prev_page() {
            Some(_) => render_list(session),
            None => "Already on the first page".to_string(),
        },
        Command::View(id) => render_post(session, &id)?,
        Command::Back => {
            session.return_to_list();
            render_list(session)
        }
        Command::Theme => format!("Theme: {}", session.toggle_theme().name()),
        Command::Add(draft) => {
            let post = session.submit_post(draft)?;
            format!("Created post {} \"{}\"", post.id, post.title)
        }
        Command::List => render_list(session),
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };
    Ok(out)
}

/// Current page of results with its navigation bar
pub fn render_list(session: &BlogSession) -> String {
    let mut out = String::new();
    let total = session.filtered().len();
    if total == 0 {
        out.push_str("No posts match your current search or filter criteria.");
        return out;
    }

    let window = session.page_window();
    let _ = writeln!(out, "Posts ({total} total) [{}]", window.section_label(total));
    for post in session.visible_posts() {
        let _ = writeln!(out, "  #{} {} ({}, {})", post.id, post.title, post.category, post.display_date());
        let _ = writeln!(out, "      {}", post.excerpt);
    }

    if !window.is_degenerate() {
        let _ = writeln!(out, "{}", window.status_text(total));
        let mut nav = Vec::new();
        if window.has_prev {
            nav.push("< Previous".to_string());
        }
        for item in &window.page_numbers {
            nav.push(match item {
                PageItem::Page(n) if *n == window.current_page => format!("[{n}]"),
                PageItem::Page(n) => n.to_string(),
                PageItem::Ellipsis => "...".to_string(),
            });
        }
        if window.has_next {
            nav.push("Next >".to_string());
        }
        let _ = write!(out, "{}", nav.join(" "));
    }
    out.trim_end().to_string()
}

fn render_post(session: &BlogSession, id: &str) -> Result<String, BlogError> {
    let post = session.view_post(id)?;
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "{} | {}", post.display_date(), post.category);
    if post.has_image() {
        let _ = writeln!(out, "[image: {}]", post.image_alt);
    }
    for paragraph in post.paragraphs() {
        let _ = writeln!(out, "\n{paragraph}");
    }

    let related = session.related_posts(id)?;
    if !related.is_empty() {
        let _ = writeln!(out, "\nRelated Posts in {}", post.category);
        for r in related {
            let _ = writeln!(out, "  #{} {}", r.id, r.title);
        }
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_a11y::{Announcer, Politeness};
    use blog_core::{seed_posts, BlogConfig, PostStore};

    fn session() -> BlogSession {
        let config = BlogConfig { posts_per_page: 2, ..Default::default() };
        let announcer = Announcer::new(config.announcer_config());
        BlogSession::new(config, announcer, PostStore::from_posts(seed_posts(), 150)).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("search aria"), Some(Command::Search("aria".into())));
        assert_eq!(Command::parse("category"), Some(Command::Category("all".into())));
        assert_eq!(Command::parse("page -3"), Some(Command::Page(-3)));
        assert_eq!(Command::parse("page x"), None);
        assert_eq!(Command::parse("view"), None);
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_parse_draft() {
        let Some(Command::Add(draft)) = Command::parse("add Title | Dev | one\\n\\ntwo") else {
            panic!("expected add");
        };
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.category, "Dev");
        assert_eq!(draft.content, "one\n\ntwo");
    }

    #[test]
    fn test_list_shows_navigation() {
        let s = session();
        let out = render_list(&s);
        assert!(out.contains("Page 1 of 2 (3 total posts)"));
        assert!(out.ends_with("[1] 2 Next >"));
    }

    #[test]
    fn test_search_command_announces() {
        let mut s = session();
        let out = execute(&mut s, Command::Search("aria".into())).unwrap();
        assert!(out.contains("ARIA Best Practices"));
        assert_eq!(
            s.announcer().text(Politeness::Polite),
            "Search updated. 1 post found for \"aria\"."
        );
    }

    #[test]
    fn test_empty_result_message() {
        let mut s = session();
        let out = execute(&mut s, Command::Category("Gardening".into())).unwrap();
        assert_eq!(out, "No posts match your current search or filter criteria.");
    }

    #[test]
    fn test_view_missing_post() {
        let mut s = session();
        assert!(execute(&mut s, Command::View("99".into())).is_err());
    }

    #[test]
    fn test_add_invalid_post() {
        let mut s = session();
        let err = execute(&mut s, Command::parse("add |Dev|").unwrap()).unwrap_err();
        assert!(matches!(err, BlogError::Validation(_)));
        assert_eq!(
            s.announcer().text(Politeness::Assertive),
            "Form has 2 errors. Please correct and try again."
        );
    }
}
