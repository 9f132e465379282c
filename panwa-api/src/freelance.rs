use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct Freelancer {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub rating: f64,
    pub price: i64,
    pub image: &'static str,
    pub skills: &'static [&'static str],
}

/// Demo directory; no provider relation backs freelancers.
pub fn freelancers() -> Vec<Freelancer> {
    vec![
        Freelancer {
            id: 1,
            name: "Somchai Jaidee",
            category: "English Teacher",
            rating: 4.8,
            price: 850,
            image: "https://placehold.co/300x200?text=Teacher",
            skills: &["English", "Teaching", "IELTS"],
        },
        Freelancer {
            id: 2,
            name: "Somying Kengkat",
            category: "Math Teacher",
            rating: 4.9,
            price: 900,
            image: "https://placehold.co/300x200?text=Math+Teacher",
            skills: &["Mathematics", "Statistics", "Teaching"],
        },
        Freelancer {
            id: 3,
            name: "Manee Mana",
            category: "Programmer",
            rating: 4.7,
            price: 1_200,
            image: "https://placehold.co/300x200?text=Programmer",
            skills: &["React", "Node.js", "Full Stack"],
        },
        Freelancer {
            id: 4,
            name: "Weera Chatdee",
            category: "Programmer",
            rating: 4.5,
            price: 1_500,
            image: "https://placehold.co/300x200?text=Developer",
            skills: &["Python", "Data Science", "Machine Learning"],
        },
        Freelancer {
            id: 5,
            name: "Pailin Sinlapin",
            category: "Graphic Designer",
            rating: 4.6,
            price: 950,
            image: "https://placehold.co/300x200?text=Designer",
            skills: &["Photoshop", "Illustrator", "UI/UX"],
        },
        Freelancer {
            id: 6,
            name: "Rungroj Boonmee",
            category: "Programmer",
            rating: 4.4,
            price: 1_100,
            image: "https://placehold.co/300x200?text=Webmaster",
            skills: &["WordPress", "PHP", "SEO"],
        },
    ]
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTab {
    #[default]
    All,
    Teacher,
    Programmer,
    Designer,
}

impl CategoryTab {
    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryTab::All => true,
            CategoryTab::Teacher => category.contains("Teacher"),
            CategoryTab::Programmer => category == "Programmer",
            CategoryTab::Designer => category == "Graphic Designer",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FreelancerQuery {
    pub q: Option<String>,
    #[serde(default)]
    pub category: CategoryTab,
}

/// Search across name, category and skills, narrowed by the category tab.
pub fn filter_freelancers(items: &[Freelancer], query: &FreelancerQuery) -> Vec<Freelancer> {
    let needle = query
        .q
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    items
        .iter()
        .filter(|f| query.category.matches(f.category))
        .filter(|f| {
            if needle.is_empty() {
                return true;
            }
            f.name.to_lowercase().contains(&needle)
                || f.category.to_lowercase().contains(&needle)
                || f.skills.iter().any(|s| s.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[derive(Debug, Serialize)]
pub struct FreelancerResponse {
    pub freelancers: Vec<Freelancer>,
    pub count: usize,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/freelancers", get(list_freelancers))
}

/// GET /v1/freelancers?q=&category=
async fn list_freelancers(Query(query): Query<FreelancerQuery>) -> Json<FreelancerResponse> {
    let filtered = filter_freelancers(&freelancers(), &query);
    Json(FreelancerResponse {
        count: filtered.len(),
        freelancers: filtered,
    })
}
