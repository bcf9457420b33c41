use chrono::Utc;
use fake::Fake;
use uuid::Uuid;

use crate::model::profile::{
    Availability::{self, Available, PartiallyAvailable, Unavailable},
    LinkType::{self, Behance, Dribbble, Github, Linkedin, Other, Portfolio, Website},
    ProfessionalLink, Profile, Skill,
    SkillLevel::{self, Advanced, Beginner, Expert, Intermediate},
};

struct SeedProfile {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: Option<&'static str>,
    title: &'static str,
    description: Option<&'static str>,
    location: &'static str,
    hourly_rate: f64,
    availability: Availability,
    skills: &'static [(&'static str, SkillLevel, &'static str)],
    links: &'static [(LinkType, &'static str, &'static str)],
}

const SEED_PROFILES: [SeedProfile; 8] = [
    SeedProfile {
        first_name: "Marie",
        last_name: "Dubois",
        email: "marie.dubois@email.com",
        phone: Some("+33 6 12 34 56 78"),
        title: "Full-Stack Developer",
        description: Some("Full-stack developer with 8 years of experience building web platforms for startups and scale-ups."),
        location: "Paris, France",
        hourly_rate: 65.0,
        availability: Available,
        skills: &[
            ("JavaScript", Expert, "Frontend"),
            ("React", Advanced, "Frontend"),
            ("Node.js", Advanced, "Backend"),
            ("PostgreSQL", Intermediate, "Database"),
        ],
        links: &[
            (Linkedin, "https://linkedin.com/in/marie-dubois", "LinkedIn"),
            (Github, "https://github.com/mariedubois", "GitHub"),
        ],
    },
    SeedProfile {
        first_name: "Thomas",
        last_name: "Martin",
        email: "thomas.martin@email.com",
        phone: Some("+33 6 23 45 67 89"),
        title: "UX/UI Designer",
        description: Some("Product designer focused on research-driven interfaces for mobile and SaaS products."),
        location: "Lyon, France",
        hourly_rate: 55.0,
        availability: PartiallyAvailable,
        skills: &[
            ("Figma", Expert, "Design"),
            ("Adobe XD", Advanced, "Design"),
            ("User Research", Advanced, "UX"),
        ],
        links: &[
            (Portfolio, "https://thomasmartin.design", "Portfolio"),
            (Dribbble, "https://dribbble.com/thomasmartin", "Dribbble"),
            (Behance, "https://behance.net/thomasmartin", "Behance"),
        ],
    },
    SeedProfile {
        first_name: "Sophie",
        last_name: "Bernard",
        email: "sophie.bernard@email.com",
        phone: None,
        title: "Data Scientist",
        description: Some("Data scientist specialised in forecasting and recommendation systems."),
        location: "Remote",
        hourly_rate: 80.0,
        availability: Available,
        skills: &[
            ("Python", Expert, "Programming"),
            ("Machine Learning", Expert, "AI"),
            ("SQL", Advanced, "Database"),
            ("TensorFlow", Intermediate, "AI"),
        ],
        links: &[
            (Linkedin, "https://linkedin.com/in/sophie-bernard-data", "LinkedIn"),
            (Github, "https://github.com/sbernard", "GitHub"),
        ],
    },
    SeedProfile {
        first_name: "Lucas",
        last_name: "Petit",
        email: "lucas.petit@email.com",
        phone: Some("+33 6 34 56 78 90"),
        title: "DevOps Engineer",
        description: Some("Cloud infrastructure and CI/CD automation for high-traffic services."),
        location: "Toulouse, France",
        hourly_rate: 75.0,
        availability: Unavailable,
        skills: &[
            ("Docker", Expert, "DevOps"),
            ("Kubernetes", Advanced, "DevOps"),
            ("AWS", Advanced, "Cloud"),
            ("Terraform", Intermediate, "DevOps"),
        ],
        links: &[
            (Linkedin, "https://linkedin.com/in/lucas-petit-devops", "LinkedIn"),
            (Github, "https://github.com/lucaspetit", "GitHub"),
        ],
    },
    SeedProfile {
        first_name: "Emma",
        last_name: "Leroy",
        email: "emma.leroy@email.com",
        phone: Some("+33 6 45 67 89 01"),
        title: "Mobile Developer",
        description: None,
        location: "Bordeaux, France",
        hourly_rate: 60.0,
        availability: Available,
        skills: &[
            ("Swift", Expert, "Mobile"),
            ("Kotlin", Advanced, "Mobile"),
            ("React Native", Advanced, "Mobile"),
        ],
        links: &[
            (Github, "https://github.com/emmaleroy", "GitHub"),
            (Website, "https://emmaleroy.dev", "Website"),
        ],
    },
    SeedProfile {
        first_name: "Hugo",
        last_name: "Moreau",
        email: "hugo.moreau@email.com",
        phone: None,
        title: "Backend Developer",
        description: Some("Java backend developer for banking and insurance APIs."),
        location: "Nantes, France",
        hourly_rate: 70.0,
        availability: Available,
        skills: &[
            ("Java", Expert, "Backend"),
            ("Spring Boot", Advanced, "Backend"),
            ("SQL", Advanced, "Database"),
            ("Docker", Intermediate, "DevOps"),
        ],
        links: &[
            (Linkedin, "https://linkedin.com/in/hugo-moreau", "LinkedIn"),
            (Github, "https://github.com/hmoreau", "GitHub"),
        ],
    },
    SeedProfile {
        first_name: "Chloé",
        last_name: "Simon",
        email: "chloe.simon@email.com",
        phone: Some("+33 6 56 78 90 12"),
        title: "Content Writer",
        description: Some("Technical and marketing copywriter for B2B software companies."),
        location: "Lille, France",
        hourly_rate: 40.0,
        availability: PartiallyAvailable,
        skills: &[
            ("Copywriting", Expert, "Writing"),
            ("SEO", Advanced, "Marketing"),
            ("WordPress", Beginner, "CMS"),
        ],
        links: &[
            (Portfolio, "https://chloesimon.fr", "Portfolio"),
            (Linkedin, "https://linkedin.com/in/chloe-simon", "LinkedIn"),
        ],
    },
    SeedProfile {
        first_name: "Antoine",
        last_name: "Laurent",
        email: "antoine.laurent@email.com",
        phone: Some("+33 6 67 89 01 23"),
        title: "Cybersecurity Consultant",
        description: Some("Penetration tester and security auditor, OSCP certified."),
        location: "Marseille, France",
        hourly_rate: 95.0,
        availability: Unavailable,
        skills: &[
            ("Penetration Testing", Expert, "Security"),
            ("Python", Advanced, "Programming"),
            ("Network Security", Expert, "Security"),
        ],
        links: &[
            (Linkedin, "https://linkedin.com/in/antoine-laurent-sec", "LinkedIn"),
            (Other, "https://root-me.org/alaurent", "Root-Me"),
        ],
    },
];

const ADDITIONAL_PROFILES: [SeedProfile; 4] = [
    SeedProfile {
        first_name: "Pierre",
        last_name: "Durand",
        email: "pierre.durand@email.com",
        phone: None,
        title: "SAP Consultant",
        description: None,
        location: "Strasbourg, France",
        hourly_rate: 110.0,
        availability: Available,
        skills: &[("SAP", Expert, "ERP"), ("ABAP", Advanced, "Programming")],
        links: &[(Linkedin, "https://linkedin.com/in/pierre-durand-sap", "LinkedIn")],
    },
    SeedProfile {
        first_name: "Léa",
        last_name: "Fontaine",
        email: "lea.fontaine@email.com",
        phone: None,
        title: "Technical Translator",
        description: None,
        location: "Remote",
        hourly_rate: 35.0,
        availability: Available,
        skills: &[
            ("Translation", Expert, "Linguistics"),
            ("English", Expert, "Languages"),
            ("German", Advanced, "Languages"),
        ],
        links: &[(Linkedin, "https://linkedin.com/in/lea-fontaine-trad", "LinkedIn")],
    },
    SeedProfile {
        first_name: "Julien",
        last_name: "Roux",
        email: "julien.roux@email.com",
        phone: None,
        title: "Blockchain Developer",
        description: None,
        location: "Nice, France",
        hourly_rate: 120.0,
        availability: PartiallyAvailable,
        skills: &[
            ("Solidity", Expert, "Blockchain"),
            ("Rust", Advanced, "Programming"),
        ],
        links: &[(Github, "https://github.com/julienroux", "GitHub")],
    },
    SeedProfile {
        first_name: "Camille",
        last_name: "Girard",
        email: "camille.girard@email.com",
        phone: None,
        title: "Motion Designer",
        description: None,
        location: "Rennes, France",
        hourly_rate: 50.0,
        availability: Unavailable,
        skills: &[
            ("After Effects", Expert, "Design"),
            ("Blender", Intermediate, "3D"),
        ],
        links: &[(Behance, "https://behance.net/camillegirard", "Behance")],
    },
];

impl SeedProfile {
    fn build(&self) -> Profile {
        let now = Utc::now();
        Profile {
            id: Uuid::now_v7(),
            first_name: self.first_name.to_string(),
            last_name: self.last_name.to_string(),
            email: self.email.to_string(),
            phone: self.phone.map(str::to_string),
            title: self.title.to_string(),
            description: self.description.map(str::to_string),
            location: Some(self.location.to_string()),
            hourly_rate: Some(self.hourly_rate),
            availability: self.availability,
            skills: self
                .skills
                .iter()
                .map(|(name, level, category)| Skill {
                    id: Uuid::now_v7(),
                    name: name.to_string(),
                    level: *level,
                    category: Some(category.to_string()),
                })
                .collect(),
            professional_links: self
                .links
                .iter()
                .map(|(link_type, url, label)| ProfessionalLink {
                    id: Uuid::now_v7(),
                    link_type: *link_type,
                    url: url.to_string(),
                    label: Some(label.to_string()),
                })
                .collect(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The fixed demonstration set. Ids are regenerated on every call.
pub fn seed_profiles() -> Vec<Profile> {
    SEED_PROFILES.iter().map(SeedProfile::build).collect()
}

/// Up to `count` profiles from the additional test pool, each with a random
/// phone number and a generated description.
pub fn additional_profiles(count: usize) -> Vec<Profile> {
    ADDITIONAL_PROFILES
        .iter()
        .take(count)
        .map(|seed| {
            let mut profile = seed.build();
            profile.phone = Some(random_phone());
            profile.description = Some(format!(
                "Professional profile for {} {}",
                profile.first_name, profile.last_name
            ));
            profile
        })
        .collect()
}

pub fn additional_pool_size() -> usize {
    ADDITIONAL_PROFILES.len()
}

fn random_phone() -> String {
    let pairs: Vec<String> = (0..4)
        .map(|_| (10..100u8).fake::<u8>().to_string())
        .collect();
    format!("+33 6 {}", pairs.join(" "))
}
