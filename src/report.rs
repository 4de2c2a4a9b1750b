use colored::Colorize;

use crate::config::CategoryConfig;
use crate::domain::{CanonicalGameRecord, PageResult};

/// Human-readable listing of one page
pub fn format_page(page: &PageResult, page_number: usize, target_size: usize) -> String {
    if page.is_empty() {
        return format!("{}", "No games found".yellow());
    }

    let mut lines: Vec<String> = page.games.iter().map(format_game).collect();
    let more = if page.len() == target_size {
        format!("more may follow on page {}", page_number + 1)
    } else {
        "end of results".to_string()
    };
    lines.push(format!("{} games, {}", page.len(), more).dimmed().to_string());
    lines.join("\n")
}

fn format_game(game: &CanonicalGameRecord) -> String {
    format!(
        "{:>8}  {}  {}  {} players  {}+  {}  {}",
        display_number(game.id),
        game.name.bold(),
        game.rating.green(),
        format!("{}-{}", display_number(game.min_players), display_number(game.max_players)),
        display_number(game.min_age),
        game.play_time,
        game.categories.join(", ").cyan(),
    )
}

fn display_number(value: Option<i64>) -> String {
    value.map_or_else(|| "?".to_string(), |n| n.to_string())
}

pub fn format_categories(categories: &[CategoryConfig]) -> String {
    categories
        .iter()
        .map(|c| match c.rank_column {
            Some(column) => format!("{:<14} {}", c.label, column.cyan()),
            None => format!("{:<14} {}", c.label, "(global rank, unfiltered)".dimmed()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: i64) -> CanonicalGameRecord {
        CanonicalGameRecord {
            id: Some(id),
            name: format!("Game {id}"),
            description: String::new(),
            min_players: Some(2),
            max_players: None,
            min_age: Some(10),
            play_time: "30-45 min".to_string(),
            categories: vec!["Dice".to_string()],
            rating: "6.5".to_string(),
            image: String::new(),
            year: None,
        }
    }

    #[test]
    fn test_page_listing() {
        colored::control::set_override(false);
        let page = PageResult::new(vec![game(1), game(2)]);

        let text = format_page(&page, 1, 2);

        assert!(text.contains("Game 1"));
        assert!(text.contains("2-? players"));
        assert!(text.ends_with("2 games, more may follow on page 2"));
    }

    #[test]
    fn test_empty_page() {
        colored::control::set_override(false);
        assert_eq!(format_page(&PageResult::empty(), 1, 20), "No games found");
    }
}
