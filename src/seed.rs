//! Seed Catalog
//!
//! The built-in activities every install starts with. Seed entries are
//! never deletable and never written to storage.

use crate::models::{Activity, Category};

const SEEDS: &[(&str, &str, &str, Category)] = &[
    ("1", "Go for a hike", "Find a local trail and enjoy nature", Category::Outdoor),
    ("2", "Learn a new language", "Try a free lesson on Duolingo or another language app", Category::Learn),
    ("3", "Meditate for 10 minutes", "Find a quiet spot and focus on your breathing", Category::Relax),
    ("4", "Draw a self-portrait", "Grab some paper and pencils and get creative", Category::Creative),
    ("5", "Cook a new recipe", "Find something you've never made before and give it a try", Category::Creative),
    ("6", "Start a journal", "Write about your day or your thoughts", Category::Relax),
    ("7", "Watch a documentary", "Learn something new from a documentary on a topic you're curious about", Category::Learn),
    ("8", "Go for a bike ride", "Explore your neighborhood or a local bike path", Category::Outdoor),
    ("9", "Create a vision board", "Collect images and quotes that inspire you", Category::Creative),
    ("10", "Take a power nap", "Recharge with a short 20-minute nap", Category::Relax),
    ("11", "Listen to a podcast", "Find a podcast on a topic you're interested in", Category::Learn),
    ("12", "Go stargazing", "Find a dark spot and look up at the night sky", Category::Outdoor),
    ("13", "Try a VR experience", "Visit a VR arcade or use a friend's headset to explore virtual worlds", Category::Creative),
    ("14", "Attend a tech workshop", "Find a local coding or technology workshop to learn new skills", Category::Learn),
    ("15", "Start a sustainable project", "Begin composting, create a small garden, or upcycle something old", Category::Creative),
    ("16", "Try a fitness app workout", "Download a fitness app and follow a guided workout routine", Category::Outdoor),
    ("17", "Play a modern board game", "Try a strategy board game like Catan, Ticket to Ride, or Pandemic", Category::Relax),
    ("18", "Take an online course", "Sign up for a free course on platforms like Coursera or edX", Category::Learn),
];

/// Build the seed catalog.
pub fn seed_activities() -> Vec<Activity> {
    SEEDS
        .iter()
        .map(|&(id, name, description, category)| Activity {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            custom: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_catalog_shape() {
        let seeds = seed_activities();
        assert_eq!(seeds.len(), 18);
        assert!(seeds.iter().all(|a| !a.custom));

        let ids: HashSet<&str> = seeds.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), 18, "seed ids must be unique");
    }

    #[test]
    fn test_seed_category_spread() {
        let seeds = seed_activities();
        let count = |c: Category| seeds.iter().filter(|a| a.category == c).count();
        assert_eq!(count(Category::Outdoor), 4);
        assert_eq!(count(Category::Learn), 5);
        assert_eq!(count(Category::Relax), 4);
        assert_eq!(count(Category::Creative), 5);
        assert_eq!(count(Category::Other), 0);
    }
}
