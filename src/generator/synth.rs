//! Seeded synthetic records for demos and fixtures.

use crate::ranking::compute_pseudo_ranking;
use crate::types::profile::{Milestone, MilestoneProgress, Profile};
use crate::types::review::Label;
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal, Normal, Poisson};
use serde::Serialize;
use uuid::{Builder, Uuid};

pub const INDUSTRIES: [&str; 4] = ["Freelancer", "E-commerce", "Developer", "Business"];

const SKILL_VOCAB: [&str; 45] = [
    "React", "TypeScript", "Node.js", "Python", "Django", "FastAPI", "Next.js", "GraphQL",
    "TailwindCSS", "UI/UX Design", "Docker", "Kubernetes", "PostgreSQL", "Redis", "AWS",
    "Vue.js", "Angular", "Flask", "Spring Boot", "MongoDB", "MySQL", "Figma", "Jira", "CI/CD",
    "REST APIs", "SASS", "Webpack", "GCP", "Azure", "Firebase", "ElasticSearch", "RabbitMQ",
    "Microservices", "Testing", "PyTorch", "TensorFlow", "Keras", "Pandas", "Matplotlib",
    "Seaborn", "Scrum", "Agile", "Leadership", "Communication", "Problem Solving",
];

pub const MILESTONE_TEMPLATES: [(&str, &str, &str); 5] = [
    (
        "Fix Profile Basics",
        "Complete headline, overview, and add 3 portfolio items",
        "2-3 days",
    ),
    ("Enhance Portfolio", "Add case studies with outcomes", "3-5 days"),
    ("Client Outreach", "Draft 5 tailored proposals", "2 days"),
    ("Referrals", "Ask 3 prior clients for testimonials", "1-2 days"),
    ("Skill Upgrade", "Finish an advanced course", "5-7 days"),
];

const MILESTONE_COMPLETION_RATE: f64 = 0.4;

const REVIEW_TEMPLATES: [(Label, f64, &str); 15] = [
    (Label::Positive, 0.7, "Great communication and timely delivery. Would hire again."),
    (Label::Positive, 0.6, "Solid work, clear updates, responsive to feedback."),
    (Label::Neutral, 0.0, "Work met expectations, a few revisions needed but acceptable."),
    (Label::Negative, -0.6, "Missed a deadline and final polish needed more attention."),
    (Label::Positive, 0.8, "Outstanding quality and proactive suggestions on scope."),
    (Label::Neutral, -0.1, "Communication could be faster but overall fine."),
    (Label::Negative, -0.7, "Project scope was unclear and deadlines were missed."),
    (Label::Positive, 0.9, "Exceptional technical skills and leadership throughout the project."),
    (Label::Neutral, 0.1, "Average experience, some communication gaps but work delivered."),
    (Label::Negative, -0.5, "Quality did not meet expectations, required multiple revisions."),
    (Label::Positive, 0.75, "Very proactive, provided valuable suggestions and improvements."),
    (Label::Neutral, 0.05, "Work was completed, but documentation was lacking."),
    (Label::Negative, -0.4, "Responsiveness was slow, and updates were infrequent."),
    (Label::Positive, 0.85, "Delivered ahead of schedule, excellent attention to detail."),
    (Label::Neutral, -0.05, "Some minor issues, but overall satisfactory performance."),
];

/// Word swaps applied to every templated review; each word is replaced by one draw.
const SUBSTITUTIONS: [(&str, [&str; 4]); 5] = [
    (
        "communication",
        ["communication", "collaboration", "teamwork", "client interaction"],
    ),
    ("quality", ["quality", "output", "results", "deliverables"]),
    ("deadline", ["deadline", "timeline", "due date", "milestone"]),
    ("project", ["project", "assignment", "task", "engagement"]),
    ("feedback", ["feedback", "input", "comments", "suggestions"]),
];

const MENTORSHIP_TOPICS: [&str; 4] = [
    "Improve React performance patterns",
    "Portfolio storytelling",
    "Proposal strategy",
    "Scaling backend APIs",
];

pub const REVIEWED_USERS: usize = 20;
pub const COMPARED_USERS: usize = 15;
pub const MENTEE_USERS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_mentor: bool,
    pub industry: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRow {
    pub user_id: String,
    pub profile_completeness: i64,
    pub profile_views: i64,
    pub proposal_success_rate: i64,
    pub job_invitations: i64,
    pub hourly_rate: i64,
    pub skills: String,
    pub portfolio_items: i64,
    pub repeat_clients_rate: i64,
    pub updated_at: String,
}

impl ProfileRow {
    pub fn to_profile(&self) -> Profile {
        Profile {
            user_id: Some(self.user_id.clone()),
            profile_completeness: Some(self.profile_completeness as f64),
            proposal_success_rate: Some(self.proposal_success_rate as f64),
            portfolio_items: Some(self.portfolio_items as f64),
            repeat_clients_rate: Some(self.repeat_clients_rate as f64),
            ..Profile::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRow {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub score: f64,
    pub label: Label,
    pub categories: Vec<String>,
    pub suggestions: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSnapshot {
    pub profile_completeness: i64,
    pub proposal_success_rate: i64,
    pub portfolio_items: i64,
    pub hourly_rate: i64,
    pub repeat_clients_rate: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub id: String,
    pub user_id: String,
    pub competitor_identifier: String,
    pub competitor_role: String,
    pub pseudo_ranking: u8,
    pub snapshot: ProfileSnapshot,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorshipRequest {
    pub id: String,
    pub requester_id: String,
    pub mentor_id: Option<String>,
    pub topic: String,
    pub context: String,
    pub preferred_expertise: Vec<String>,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorshipMessage {
    pub id: String,
    pub request_id: String,
    pub sender_id: String,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Industry {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub fn industry_catalogue() -> Vec<Industry> {
    vec![
        Industry {
            slug: "freelancer",
            name: "Freelancer",
            description: "Freelance professionals",
            features: &["profiles", "roadmap", "sentiment"],
        },
        Industry {
            slug: "ecommerce",
            name: "E-commerce",
            description: "Online stores and sellers",
            features: &["catalog", "conversion"],
        },
        Industry {
            slug: "developer",
            name: "Developer",
            description: "Software engineers and teams",
            features: &["repos", "pipelines"],
        },
        Industry {
            slug: "business",
            name: "Business",
            description: "General business profiles",
            features: &["metrics", "insights"],
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticData {
    pub users: Vec<UserRow>,
    pub profiles: Vec<ProfileRow>,
    pub milestones: Vec<Milestone>,
    pub reviews: Vec<ReviewRow>,
    pub comparisons: Vec<ComparisonRow>,
    pub mentorship_requests: Vec<MentorshipRequest>,
    pub mentorship_messages: Vec<MentorshipMessage>,
    pub industries: Vec<Industry>,
}

pub struct Synthesizer {
    rng: StdRng,
    timestamp: String,
}

impl Synthesizer {
    /// Every record is stamped with `timestamp`, so output depends only on the seed otherwise.
    pub fn new(seed: u64, timestamp: impl Into<String>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            timestamp: timestamp.into(),
        }
    }

    pub fn generate(mut self, user_count: usize) -> SyntheticData {
        let users = self.users(user_count);
        let profiles = self.profiles(&users);
        let milestones = self.milestones(&users);
        let reviews = self.reviews(&users);
        let comparisons = self.comparisons(&users, &profiles, &milestones);
        let (mentorship_requests, mentorship_messages) = self.mentorship(&users);
        SyntheticData {
            users,
            profiles,
            milestones,
            reviews,
            comparisons,
            mentorship_requests,
            mentorship_messages,
            industries: industry_catalogue(),
        }
    }

    fn uuid(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.gen();
        let id: Uuid = Builder::from_random_bytes(bytes).into_uuid();
        id.to_string()
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        match Normal::new(mean, std_dev) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => mean,
        }
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn users(&mut self, count: usize) -> Vec<UserRow> {
        let mentor_count = (count / 5).max(1).min(count);
        let mentors = index::sample(&mut self.rng, count, mentor_count).into_vec();

        (0..count)
            .map(|i| UserRow {
                id: self.uuid(),
                name: format!("User {}", i + 1),
                email: format!("user{}@example.com", i + 1),
                is_mentor: mentors.contains(&i),
                industry: self.pick(&INDUSTRIES).to_string(),
                created_at: self.timestamp.clone(),
            })
            .collect()
    }

    fn skills(&mut self) -> String {
        let count = self.rng.gen_range(3..9);
        let mut skills: Vec<&str> = SKILL_VOCAB
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect();
        skills.sort_unstable();
        skills.join(";")
    }

    fn profiles(&mut self, users: &[UserRow]) -> Vec<ProfileRow> {
        users
            .iter()
            .map(|user| {
                let mean = self.rng.gen_range(60..90) as f64;
                let sd = self.rng.gen_range(8..20) as f64;
                let completeness = self.normal(mean, sd).clamp(20.0, 100.0);

                let mean = self.rng.gen_range(10..40) as f64;
                let sd = self.rng.gen_range(5..15) as f64;
                let success = self.normal(mean, sd).clamp(0.0, 100.0);

                let lambda = self.rng.gen_range(3..15) as f64;
                let portfolio = match Poisson::new(lambda) {
                    Ok(dist) => dist.sample(&mut self.rng),
                    Err(_) => lambda,
                };

                let mean = self.rng.gen_range(10..50) as f64;
                let sd = self.rng.gen_range(5..20) as f64;
                let repeat = self.normal(mean, sd).clamp(0.0, 100.0);

                let base_rate = self.rng.gen_range(20..120) as f64;
                let sigma = self.rng.gen_range(0.2..0.6);
                let hourly = match LogNormal::new(base_rate.ln(), sigma) {
                    Ok(dist) => dist.sample(&mut self.rng),
                    Err(_) => base_rate,
                };

                let mean = self.rng.gen_range(100..2000) as f64;
                let sd = self.rng.gen_range(50..400) as f64;
                let views = self.normal(mean, sd).max(0.0);

                let mean = self.rng.gen_range(1..15) as f64;
                let sd = self.rng.gen_range(1..5) as f64;
                let invitations = self.normal(mean, sd).max(0.0);

                ProfileRow {
                    user_id: user.id.clone(),
                    profile_completeness: completeness.round_ties_even() as i64,
                    profile_views: views as i64,
                    proposal_success_rate: success.round_ties_even() as i64,
                    job_invitations: invitations as i64,
                    hourly_rate: hourly.clamp(10.0, 200.0) as i64,
                    skills: self.skills(),
                    portfolio_items: portfolio.max(0.0) as i64,
                    repeat_clients_rate: repeat.round_ties_even() as i64,
                    updated_at: self.timestamp.clone(),
                }
            })
            .collect()
    }

    fn milestones(&mut self, users: &[UserRow]) -> Vec<Milestone> {
        let mut rows = Vec::with_capacity(users.len() * MILESTONE_TEMPLATES.len());
        for user in users {
            for (order, (title, description, effort)) in MILESTONE_TEMPLATES.iter().enumerate() {
                rows.push(Milestone {
                    id: self.uuid(),
                    user_id: user.id.clone(),
                    title: title.to_string(),
                    description: description.to_string(),
                    estimated_effort: effort.to_string(),
                    order: order as u32 + 1,
                    completed: self.rng.gen_bool(MILESTONE_COMPLETION_RATE),
                    created_at: self.timestamp.clone(),
                });
            }
        }
        rows
    }

    fn reviews(&mut self, users: &[UserRow]) -> Vec<ReviewRow> {
        let per_user = self.rng.gen_range(3..10);
        let mut rows = Vec::new();
        for user in users.iter().take(REVIEWED_USERS) {
            for _ in 0..per_user {
                let (label, base_score, template) =
                    REVIEW_TEMPLATES[self.rng.gen_range(0..REVIEW_TEMPLATES.len())];
                let mut text = template.to_string();
                for (word, options) in SUBSTITUTIONS {
                    let replacement = self.pick(&options);
                    text = text.replace(word, replacement);
                }
                let jitter = self.normal(0.0, 0.1);
                rows.push(ReviewRow {
                    id: self.uuid(),
                    user_id: user.id.clone(),
                    text,
                    score: ((base_score + jitter) * 100.0).round() / 100.0,
                    label,
                    categories: Vec::new(),
                    suggestions: Vec::new(),
                    created_at: self.timestamp.clone(),
                });
            }
        }
        rows
    }

    fn comparisons(
        &mut self,
        users: &[UserRow],
        profiles: &[ProfileRow],
        milestones: &[Milestone],
    ) -> Vec<ComparisonRow> {
        let mut rows = Vec::new();
        for (user, profile) in users.iter().zip(profiles).take(COMPARED_USERS) {
            let completed = milestones
                .iter()
                .filter(|milestone| milestone.user_id == user.id && milestone.completed)
                .count() as i64;
            let progress = MilestoneProgress::new(completed, MILESTONE_TEMPLATES.len() as i64);
            let ranking = compute_pseudo_ranking(&profile.to_profile(), progress);
            let prefix: String = user.id.chars().take(8).collect();

            rows.push(ComparisonRow {
                id: self.uuid(),
                user_id: user.id.clone(),
                competitor_identifier: format!("competitor:{prefix}"),
                competitor_role: "frontend".to_string(),
                pseudo_ranking: ranking.score,
                snapshot: ProfileSnapshot {
                    profile_completeness: profile.profile_completeness,
                    proposal_success_rate: profile.proposal_success_rate,
                    portfolio_items: profile.portfolio_items,
                    hourly_rate: profile.hourly_rate,
                    repeat_clients_rate: profile.repeat_clients_rate,
                },
                created_at: self.timestamp.clone(),
            });
        }
        rows
    }

    fn mentorship(&mut self, users: &[UserRow]) -> (Vec<MentorshipRequest>, Vec<MentorshipMessage>) {
        let mentors: Vec<&UserRow> = users.iter().filter(|user| user.is_mentor).collect();
        let mut requests = Vec::new();
        let mut messages = Vec::new();
        for (i, requester) in users.iter().take(MENTEE_USERS).enumerate() {
            let request_id = self.uuid();
            let mentor_id = if mentors.is_empty() {
                None
            } else {
                Some(mentors[i % mentors.len()].id.clone())
            };
            requests.push(MentorshipRequest {
                id: request_id.clone(),
                requester_id: requester.id.clone(),
                mentor_id,
                topic: MENTORSHIP_TOPICS[i % MENTORSHIP_TOPICS.len()].to_string(),
                context: "Looking for guidance and code review on recent work.".to_string(),
                preferred_expertise: vec!["Senior Frontend".to_string(), "Performance".to_string()],
                status: "pending".to_string(),
                created_at: self.timestamp.clone(),
            });
            messages.push(MentorshipMessage {
                id: self.uuid(),
                request_id,
                sender_id: requester.id.clone(),
                text: "Hi! Can you review my memo?".to_string(),
                created_at: self.timestamp.clone(),
            });
        }
        (requests, messages)
    }
}
