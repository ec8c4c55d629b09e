//! Plain-text rendering of the dashboard for the terminal front end.

use std::fmt::Write;

use crate::dashboard::DashboardView;
use crate::error::DashboardError;
use crate::model::RecipeDetail;
use crate::route::Route;
use crate::session::DashboardSession;
use crate::sidebar::Sidebar;

const BAR: char = '#';

pub fn render_sidebar(sidebar: &Sidebar) -> String {
    if sidebar.is_collapsed() {
        return format!("[+] {}\n", sidebar.toggle_title());
    }
    format!(
        "[-] {}\nWorld Cuisine\nDiscover and favorite recipes!\nFavorites: {}\n",
        sidebar.toggle_title(),
        sidebar.favorites_count()
    )
}

pub fn render_dashboard(view: &DashboardView<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Total Recipes: {}", view.total_recipes);
    let _ = writeln!(out, "Favorites: {}", view.favorites_count);
    if let Some(error) = view.error {
        let _ = writeln!(out, "{}", error);
    }
    out.push('\n');

    if view.displayed.is_empty() {
        out.push_str("No recipes found\n");
    } else {
        for recipe in &view.displayed {
            let marker = if view.is_favorite(recipe.id) { '*' } else { ' ' };
            let _ = writeln!(out, "{} {:>8}  {}", marker, recipe.id, recipe.title);
        }
    }

    out.push_str("\nRecipe Insights\n");
    for count in &view.cuisine_counts {
        let bar: String = std::iter::repeat(BAR).take(count.value).collect();
        let _ = writeln!(out, "{:<9}{:>3} {}", count.name, count.value, bar);
    }
    let split = view.favorites_split;
    let _ = writeln!(out, "Favorites {} / Others {}", split.favorites, split.others);

    out
}

/// Render the page behind a route, applying any fetch still in flight first
pub async fn render_route(
    session: &mut DashboardSession,
    route: &Route,
) -> Result<String, DashboardError> {
    match route {
        Route::Dashboard => {
            session.settle().await;
            Ok(render_dashboard(&session.view()))
        }
        Route::Recipe(_) => Ok(render_detail(&session.open(route).await?)),
    }
}

pub fn render_detail(detail: &RecipeDetail) -> String {
    let mut out = format!("{} (#{})\n", detail.title, detail.id);
    if !detail.cuisines.is_empty() {
        let _ = writeln!(out, "Cuisine: {}", detail.cuisines.join(", "));
    }
    if let Some(minutes) = detail.ready_in_minutes {
        let _ = writeln!(out, "Ready in: {} minutes", minutes);
    }
    if let Some(servings) = detail.servings {
        let _ = writeln!(out, "Servings: {}", servings);
    }
    if let Some(url) = &detail.source_url {
        let _ = writeln!(out, "Source: {}", url);
    }
    if let Some(summary) = &detail.summary {
        let _ = writeln!(out, "\n{}", summary);
    }
    out
}
