//! Skill tables.

use crate::state::SkillsTab;

/// A skill with a proficiency percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// 0..=100
    pub level: u8,
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const WEB_DEV_SKILLS: [Skill; 9] = [
    skill("React", 90),
    skill("Vue.js", 85),
    skill("Tailwind CSS", 95),
    skill("PHP", 80),
    skill("Laravel", 85),
    skill("MySQL", 88),
    skill("MongoDB", 75),
    skill("Python", 70),
    skill("C++", 65),
];

pub const EDITING_SKILLS: [Skill; 5] = [
    skill("Adobe After Effects", 80),
    skill("Adobe Photoshop", 85),
    skill("Adobe Illustrator", 75),
    skill("Canva", 90),
    skill("Blender", 70),
];

pub const HACKING_SKILLS: [Skill; 2] = [skill("Kali Linux", 75), skill("Ubuntu", 85)];

pub fn skills_for(tab: SkillsTab) -> &'static [Skill] {
    match tab {
        SkillsTab::WebDev => &WEB_DEV_SKILLS,
        SkillsTab::Editing => &EDITING_SKILLS,
        SkillsTab::Hacking => &HACKING_SKILLS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TabOption;

    #[test]
    fn test_levels_are_percentages() {
        for tab in SkillsTab::ALL {
            for skill in skills_for(*tab) {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(skills_for(SkillsTab::WebDev).len(), 9);
        assert_eq!(skills_for(SkillsTab::Editing).len(), 5);
        assert_eq!(skills_for(SkillsTab::Hacking).len(), 2);
        assert_eq!(skills_for(SkillsTab::Hacking)[1].name, "Ubuntu");
    }
}
