use crate::core::presenter::rows;
use crate::core::session::AuthSession;
use crate::core::view_state::{CatalogDisplay, CatalogViewState, EMPTY_MESSAGE, LOADING_MESSAGE};
use crate::domain::model::Category;
use crate::domain::ports::ConfigProvider;
use std::fmt::Write;

/// Category bar, selected entry in brackets.
pub fn render_category_bar(selected: Category) -> String {
    Category::ALL
        .iter()
        .map(|c| {
            if *c == selected {
                format!("[{}]", c)
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_catalog<C: ConfigProvider + ?Sized>(state: &CatalogViewState, config: &C) -> String {
    let mut out = render_category_bar(state.selected_category());
    out.push_str("\n\n");

    match state.display() {
        CatalogDisplay::Loading => out.push_str(LOADING_MESSAGE),
        CatalogDisplay::Error(message) => out.push_str(message),
        CatalogDisplay::Empty => out.push_str(EMPTY_MESSAGE),
        CatalogDisplay::Listings(listings) => {
            for row in rows(&listings, config) {
                let _ = writeln!(out, "{}", row.title);
                let _ = write!(out, "  {}", row.price);
                if let Some(category) = &row.category {
                    let _ = write!(out, "  ·  {}", category);
                }
                out.push('\n');
                if let Some(image_url) = &row.image_url {
                    let _ = writeln!(out, "  image: {}", image_url);
                }
                if let Some(detail_url) = &row.detail_url {
                    let _ = writeln!(out, "  more:  {}", detail_url);
                }
            }
        }
    }

    out.trim_end().to_string()
}

pub fn render_menu(session: &AuthSession) -> String {
    let mut out = String::from("PARUSE MENU");
    for item in session.menu_items() {
        out.push_str("\n  ");
        out.push_str(&item.label());
    }
    if let Some(message) = session.error_message() {
        out.push_str("\n  ");
        out.push_str(message);
    }
    out
}
