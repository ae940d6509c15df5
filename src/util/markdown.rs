use crate::data::models::Giveaway;

pub fn render(giveaways: &[Giveaway], category: &str) -> String {
    let mut md = format!("# {} Giveaways ({})\n\n", category, giveaways.len());

    for g in giveaways {
        md.push_str(&format!("## [{}]({})\n", g.title, g.open_giveaway_url));

        if let Some(thumbnail) = present(&g.thumbnail) {
            md.push_str(&format!("![Thumbnail]({})\n\n", thumbnail));
        }

        md.push_str(&format!("- **Worth**: {}\n", g.worth));

        if let Some(published) = present(&g.published_date) {
            md.push_str(&format!("- **Published**: {}\n", published));
        }
        if let Some(ends) = present(&g.end_date) {
            md.push_str(&format!("- **Ends**: {}\n", ends));
        }
        if let Some(users) = g.users {
            md.push_str(&format!("- **Users Claimed**: {}\n", users));
        }

        md.push_str(&format!(
            "\n### Description\n{}\n\n### Instructions\n{}\n\n---\n\n",
            g.description, g.instructions
        ));
    }

    md
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
