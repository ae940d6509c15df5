use crate::data::models::{Category, Giveaway};

/// Giveaways grouped per category, in `Category::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct Buckets {
    groups: Vec<(Category, Vec<Giveaway>)>,
}

impl Buckets {
    fn new() -> Self {
        Self {
            groups: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }

    fn push(&mut self, category: Category, giveaway: &Giveaway) {
        if let Some((_, entries)) = self.groups.iter_mut().find(|(c, _)| *c == category) {
            entries.push(giveaway.clone());
        }
    }

    pub fn get(&self, category: Category) -> &[Giveaway] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Giveaway])> {
        self.groups.iter().map(|(c, entries)| (*c, entries.as_slice()))
    }

    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[Giveaway])> {
        self.iter().filter(|(_, entries)| !entries.is_empty())
    }
}

/// Sorts giveaways into platform buckets. A giveaway can land in several
/// platform buckets at once, but DLCs only ever go to `Category::Dlcs`.
pub fn classify(giveaways: &[Giveaway]) -> Buckets {
    let mut buckets = Buckets::new();

    for giveaway in giveaways {
        for category in categories(giveaway) {
            buckets.push(category, giveaway);
        }
    }

    buckets
}

fn categories(giveaway: &Giveaway) -> Vec<Category> {
    if giveaway.is_dlc() {
        return vec![Category::Dlcs];
    }

    let platforms: Vec<String> = giveaway
        .platform_list()
        .map(|p| p.to_lowercase())
        .collect();

    let mut matched = Vec::new();

    if has(&platforms, |p| p == "epic games store") {
        matched.push(Category::EpicGames);
    }
    if has(&platforms, |p| p == "steam") {
        matched.push(Category::Steam);
    }
    if has(&platforms, |p| p == "playstation 5") {
        matched.push(Category::PlayStation5);
    }
    if has(&platforms, |p| p.contains("xbox")) {
        matched.push(Category::Xbox);
    }
    if has(&platforms, |p| p == "pc") {
        matched.push(Category::Pc);
    }
    if has(&platforms, |p| p == "android" || p == "ios") {
        matched.push(Category::Mobile);
    }

    if matched.is_empty() {
        matched.push(Category::Other);
    }

    matched
}

fn has(platforms: &[String], test: impl Fn(&str) -> bool) -> bool {
    platforms.iter().any(|p| test(p.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn giveaway(title: &str, platforms: &str, kind: Option<&str>) -> Giveaway {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "worth": "$5",
            "platforms": platforms,
            "description": "d",
            "instructions": "i",
            "open_giveaway_url": "http://x",
            "type": kind,
        }))
        .unwrap()
    }

    fn titles(buckets: &Buckets, category: Category) -> Vec<&str> {
        buckets
            .get(category)
            .iter()
            .map(|g| g.title.as_str())
            .collect()
    }

    #[test]
    fn pc_and_steam_record_lands_in_both() {
        let buckets = classify(&[giveaway("A", "PC,Steam", None)]);

        assert_eq!(titles(&buckets, Category::Pc), vec!["A"]);
        assert_eq!(titles(&buckets, Category::Steam), vec!["A"]);
        for category in [
            Category::Dlcs,
            Category::EpicGames,
            Category::Xbox,
            Category::PlayStation5,
            Category::Mobile,
            Category::Other,
        ] {
            assert!(buckets.get(category).is_empty(), "{category} not empty");
        }

        let written: Vec<_> = buckets.non_empty().map(|(c, _)| c).collect();
        assert_eq!(written, vec![Category::Steam, Category::Pc]);
    }

    #[test]
    fn xbox_matches_by_substring() {
        let buckets = classify(&[giveaway("A", "Steam, Xbox Series X", None)]);
        assert_eq!(titles(&buckets, Category::Steam), vec!["A"]);
        assert_eq!(titles(&buckets, Category::Xbox), vec!["A"]);
    }

    #[test]
    fn unknown_platform_goes_to_other_only() {
        let buckets = classify(&[giveaway("A", "Nintendo Switch", None)]);
        let hit: Vec<_> = buckets.non_empty().map(|(c, _)| c).collect();
        assert_eq!(hit, vec![Category::Other]);
    }

    #[test]
    fn dlc_never_leaves_the_dlc_bucket() {
        let records = [
            giveaway("A", "PC, Steam, Xbox One", Some("DLC")),
            giveaway("B", "Android", Some("dlc")),
            giveaway("C", "Nintendo Switch", Some("Dlc")),
        ];
        let buckets = classify(&records);

        assert_eq!(titles(&buckets, Category::Dlcs), vec!["A", "B", "C"]);
        let hit: Vec<_> = buckets.non_empty().map(|(c, _)| c).collect();
        assert_eq!(hit, vec![Category::Dlcs]);
    }

    #[test]
    fn exact_matches_are_case_insensitive_and_trimmed() {
        let buckets = classify(&[
            giveaway("A", "  EPIC GAMES STORE ,pc", None),
            giveaway("B", "PlayStation 5", None),
            giveaway("C", "iOS, Android", None),
            giveaway("D", "PlayStation 4", None),
            giveaway("E", "Steam Deck", None),
        ]);

        assert_eq!(titles(&buckets, Category::EpicGames), vec!["A"]);
        assert_eq!(titles(&buckets, Category::Pc), vec!["A"]);
        assert_eq!(titles(&buckets, Category::PlayStation5), vec!["B"]);
        assert_eq!(titles(&buckets, Category::Mobile), vec!["C"]);
        assert_eq!(titles(&buckets, Category::Other), vec!["D", "E"]);
        assert!(buckets.get(Category::Steam).is_empty());
    }

    #[test]
    fn input_order_is_preserved() {
        let buckets = classify(&[
            giveaway("first", "Steam", None),
            giveaway("second", "Steam, PC", None),
            giveaway("third", "Steam", Some("Game")),
        ]);
        assert_eq!(
            titles(&buckets, Category::Steam),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn every_category_is_present_even_when_empty() {
        let buckets = classify(&[]);
        let all: Vec<_> = buckets.iter().map(|(c, _)| c).collect();
        assert_eq!(all, Category::ALL.to_vec());
        assert_eq!(buckets.non_empty().count(), 0);
    }
}
