#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Languages,
    FrameworksAndTools,
    DatabasesAndCloud,
    SoftSkills,
}

impl SkillCategory {
    pub const ORDER: [SkillCategory; 4] = [
        SkillCategory::Languages,
        SkillCategory::FrameworksAndTools,
        SkillCategory::DatabasesAndCloud,
        SkillCategory::SoftSkills,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::FrameworksAndTools => "Frameworks & Tools",
            SkillCategory::DatabasesAndCloud => "Databases & Cloud",
            SkillCategory::SoftSkills => "Soft Skills",
        }
    }

    pub fn is_soft(self) -> bool {
        matches!(self, SkillCategory::SoftSkills)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub label: &'static str,
    pub category: SkillCategory,
    pub icon_key: Option<&'static str>,
    pub level: Option<u8>,
    pub url: Option<&'static str>,
}

impl Skill {
    const fn hard(
        label: &'static str,
        category: SkillCategory,
        icon_key: &'static str,
        level: u8,
    ) -> Self {
        Self {
            label,
            category,
            icon_key: Some(icon_key),
            level: Some(level),
            url: None,
        }
    }

    const fn soft(label: &'static str) -> Self {
        Self {
            label,
            category: SkillCategory::SoftSkills,
            icon_key: None,
            level: None,
            url: None,
        }
    }

    /// Icon class, only for hard skills that name an icon.
    pub fn icon_class(&self) -> Option<String> {
        if self.category.is_soft() {
            return None;
        }
        self.icon_key
            .map(|key| format!("devicon-{key}-plain skill-chip-icon"))
    }

    pub fn fallback_initial(&self) -> String {
        self.label
            .chars()
            .next()
            .map(|ch| ch.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn chip_class(&self) -> &'static str {
        if self.icon_class().is_some() {
            "skill-chip"
        } else {
            "skill-chip skill-chip-no-icon"
        }
    }

    pub fn link_label(&self) -> String {
        format!("{} (opens in new tab)", self.label)
    }
}

pub const SKILLS: &[Skill] = &[
    Skill::hard("JavaScript", SkillCategory::Languages, "javascript", 85),
    Skill::hard("TypeScript", SkillCategory::Languages, "typescript", 80),
    Skill::hard("Python", SkillCategory::Languages, "python", 75),
    Skill::hard("HTML/CSS", SkillCategory::Languages, "html5", 90),
    Skill::hard("React", SkillCategory::FrameworksAndTools, "react", 70),
    Skill::hard("Node.js", SkillCategory::FrameworksAndTools, "nodejs", 75),
    Skill::hard("Git", SkillCategory::FrameworksAndTools, "git", 80),
    Skill::hard("Bootstrap", SkillCategory::FrameworksAndTools, "bootstrap", 85),
    Skill::hard("SQL", SkillCategory::DatabasesAndCloud, "postgresql", 70),
    Skill::hard("MongoDB", SkillCategory::DatabasesAndCloud, "mongodb", 65),
    Skill::hard("AWS", SkillCategory::DatabasesAndCloud, "amazonwebservices", 60),
    Skill::soft("Problem Solving"),
    Skill::soft("Collaboration"),
    Skill::soft("Communication"),
];

/// Groups skills by category in display order, dropping empty categories.
pub fn group_by_category(skills: &[Skill]) -> Vec<(SkillCategory, Vec<&Skill>)> {
    SkillCategory::ORDER
        .iter()
        .filter_map(|category| {
            let members: Vec<&Skill> = skills
                .iter()
                .filter(|skill| skill.category == *category)
                .collect();
            (!members.is_empty()).then_some((*category, members))
        })
        .collect()
}
