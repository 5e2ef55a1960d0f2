//! Static copy for the pitch page.
//!
//! Pure data: renderers decide how icons and color tokens look.

/// The eight sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    Problem,
    Solution,
    Features,
    Technical,
    Impact,
    Team,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Problem,
        SectionId::Solution,
        SectionId::Features,
        SectionId::Technical,
        SectionId::Impact,
        SectionId::Team,
        SectionId::Contact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Problem => "Problem",
            SectionId::Solution => "Solution",
            SectionId::Features => "Features",
            SectionId::Technical => "Technology",
            SectionId::Impact => "Impact",
            SectionId::Team => "Team",
            SectionId::Contact => "Contact",
        }
    }
}

/// Symbolic icon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRef {
    Globe,
    Play,
    ArrowRight,
    AlertTriangle,
    DollarSign,
    Users,
    Brain,
    BookOpen,
    CheckCircle,
    Smartphone,
    Volume,
    Refresh,
    Accessibility,
    Code,
    Database,
    Cpu,
    Cloud,
    Mic,
    Clock,
    TrendingUp,
    Palette,
    Github,
    Linkedin,
    Mail,
    Trophy,
    ExternalLink,
    Earth,
    Money,
    Rocket,
}

/// Symbolic gradient/accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    BlueCyan,
    GreenEmerald,
    VioletPurple,
    OrangeRed,
    YellowOrange,
    PurpleViolet,
    IndigoBlue,
    RedPink,
    TealCyan,
    PinkRose,
    EmeraldBlue,
    RedOrange,
    BlueViolet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconRef,
    pub color: ColorToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub card: ContentCard,
    pub details: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechItem {
    pub name: &'static str,
    pub icon: IconRef,
    pub color: ColorToken,
}

/// Animated impact statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub target: i64,
    pub suffix: &'static str,
    pub icon: IconRef,
    pub color: ColorToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub icon: IconRef,
    pub color: ColorToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub color: ColorToken,
}

pub const EVENT_BADGE: &str = "Smart India Hackathon 2025";
pub const HERO_TITLE: &str = "Gyanify – AI-Powered Multilingual Content Localization Engine";
pub const HERO_TAGLINE: &str = "Breaking language barriers in skill education through intelligent AI-powered translation and localization";
pub const HERO_ACTIONS: [(&str, IconRef); 2] = [
    ("View Prototype", IconRef::Play),
    ("Join Our Mission", IconRef::ArrowRight),
];

pub const TEAM_NAME: &str = "Team Binary DNF";

pub fn section_copy(id: SectionId) -> SectionCopy {
    match id {
        SectionId::Hero => SectionCopy {
            heading: HERO_TITLE,
            subtitle: HERO_TAGLINE,
            color: ColorToken::BlueViolet,
        },
        SectionId::Problem => SectionCopy {
            heading: "The Challenge",
            subtitle: "Current educational systems face significant barriers in delivering inclusive, multilingual learning experiences",
            color: ColorToken::RedOrange,
        },
        SectionId::Solution => SectionCopy {
            heading: "Our Innovative Solution",
            subtitle: "A comprehensive AI-driven platform that revolutionizes multilingual content localization for global education",
            color: ColorToken::BlueViolet,
        },
        SectionId::Features => SectionCopy {
            heading: "Powerful Features",
            subtitle: "Cutting-edge capabilities designed to transform multilingual education accessibility",
            color: ColorToken::VioletPurple,
        },
        SectionId::Technical => SectionCopy {
            heading: "Technical Architecture",
            subtitle: "Built on a robust, scalable technology stack designed for enterprise-grade performance",
            color: ColorToken::IndigoBlue,
        },
        SectionId::Impact => SectionCopy {
            heading: "Global Impact",
            subtitle: "Transforming education accessibility and bridging the digital divide across linguistic communities",
            color: ColorToken::EmeraldBlue,
        },
        SectionId::Team => SectionCopy {
            heading: "Meet Our Team",
            subtitle: "A diverse group of passionate developers, designers, and innovators united by the mission to democratize education through technology",
            color: ColorToken::BlueViolet,
        },
        SectionId::Contact => SectionCopy {
            heading: "Let's Connect",
            subtitle: "Ready to revolutionize multilingual education? Get in touch with Team Binary DNF",
            color: ColorToken::BlueViolet,
        },
    }
}

pub const PROBLEMS: [ContentCard; 3] = [
    ContentCard {
        title: "Language Lock-in",
        description: "Training content trapped in English or limited languages, excluding diverse learners worldwide.",
        icon: IconRef::AlertTriangle,
        color: ColorToken::RedOrange,
    },
    ContentCard {
        title: "Costly Manual Translation",
        description: "Traditional translation methods are expensive, time-consuming, and often inconsistent in quality.",
        icon: IconRef::DollarSign,
        color: ColorToken::RedOrange,
    },
    ContentCard {
        title: "Rural Accessibility Gap",
        description: "Rural and regional learners struggle with content accessibility due to language barriers.",
        icon: IconRef::Users,
        color: ColorToken::RedOrange,
    },
];

pub const SOLUTIONS: [ContentCard; 4] = [
    ContentCard {
        title: "AI-Powered Translation & Dubbing",
        description: "Advanced AI models translate text, audio, and video content with contextual accuracy and cultural sensitivity.",
        icon: IconRef::Brain,
        color: ColorToken::BlueCyan,
    },
    ContentCard {
        title: "Domain-Specific Glossary",
        description: "Specialized terminology databases ensure technical accuracy across different industries and subjects.",
        icon: IconRef::BookOpen,
        color: ColorToken::GreenEmerald,
    },
    ContentCard {
        title: "Human-in-Loop Validation",
        description: "Expert trainers review and approve translations, maintaining quality while scaling efficiently.",
        icon: IconRef::CheckCircle,
        color: ColorToken::VioletPurple,
    },
    ContentCard {
        title: "Seamless LMS Integration",
        description: "Direct integration with learning management systems and mobile apps for instant deployment.",
        icon: IconRef::Smartphone,
        color: ColorToken::OrangeRed,
    },
];

pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        card: ContentCard {
            title: "Multi-language Support",
            description: "22+ Indian languages supported",
            icon: IconRef::Globe,
            color: ColorToken::BlueCyan,
        },
        details: "Hindi, Bengali, Tamil, Telugu, Marathi, Gujarati, Kannada, Malayalam, Punjabi, and more",
    },
    FeatureCard {
        card: ContentCard {
            title: "Native Voice Generation",
            description: "Authentic local accents",
            icon: IconRef::Volume,
            color: ColorToken::GreenEmerald,
        },
        details: "AI-powered voiceovers that capture regional pronunciation and cultural nuances",
    },
    FeatureCard {
        card: ContentCard {
            title: "Continuous Learning",
            description: "AI feedback improvement loop",
            icon: IconRef::Refresh,
            color: ColorToken::VioletPurple,
        },
        details: "Machine learning models that continuously improve translation accuracy through user feedback",
    },
    FeatureCard {
        card: ContentCard {
            title: "Universal Accessibility",
            description: "Inclusive design for all learners",
            icon: IconRef::Accessibility,
            color: ColorToken::OrangeRed,
        },
        details: "Speech-to-text, text-to-speech, screen reader compatibility, and visual accessibility features",
    },
];

pub const PIPELINE_TITLE: &str = "AI Processing Pipeline";
pub const PIPELINE_STEPS: [&str; 6] = [
    "Content Input",
    "Language Detection",
    "AI Translation",
    "Quality Check",
    "Voice Generation",
    "Final Output",
];

pub const TECH_STACK: [TechItem; 8] = [
    TechItem { name: "Django", icon: IconRef::Code, color: ColorToken::GreenEmerald },
    TechItem { name: "Flutter", icon: IconRef::Smartphone, color: ColorToken::BlueCyan },
    TechItem { name: "MERN Stack", icon: IconRef::Database, color: ColorToken::YellowOrange },
    TechItem { name: "Whisper AI", icon: IconRef::Mic, color: ColorToken::PurpleViolet },
    TechItem { name: "IndicTrans", icon: IconRef::Code, color: ColorToken::IndigoBlue },
    TechItem { name: "Firebase", icon: IconRef::Cloud, color: ColorToken::RedPink },
    TechItem { name: "OpenAI/Gemini", icon: IconRef::Cpu, color: ColorToken::TealCyan },
    TechItem { name: "n8n Automation", icon: IconRef::Database, color: ColorToken::VioletPurple },
];

pub const INTEGRATION_TITLE: &str = "Enterprise Integration Ready";
pub const INTEGRATION_SUBTITLE: &str = "RESTful APIs, SDKs, and webhook support for seamless integration with existing learning platforms";
pub const INTEGRATIONS: [&str; 5] = ["REST API", "GraphQL", "Webhooks", "SDK Support", "OAuth 2.0"];

pub const METRICS: [Metric; 4] = [
    Metric {
        label: "Students Reached",
        target: 500_000,
        suffix: "+",
        icon: IconRef::Users,
        color: ColorToken::BlueCyan,
    },
    Metric {
        label: "Time Saved",
        target: 80,
        suffix: "%",
        icon: IconRef::Clock,
        color: ColorToken::GreenEmerald,
    },
    Metric {
        label: "Languages Supported",
        target: 22,
        suffix: "+",
        icon: IconRef::Globe,
        color: ColorToken::VioletPurple,
    },
    Metric {
        label: "Translation Accuracy",
        target: 95,
        suffix: "%",
        icon: IconRef::TrendingUp,
        color: ColorToken::OrangeRed,
    },
];

pub const IMPACT_HIGHLIGHTS: [ContentCard; 3] = [
    ContentCard {
        title: "Inclusive Learning",
        description: "Empowering rural and regional students with content in their native languages",
        icon: IconRef::Earth,
        color: ColorToken::EmeraldBlue,
    },
    ContentCard {
        title: "Cost Reduction",
        description: "Reducing localization costs by 80% compared to traditional translation methods",
        icon: IconRef::Money,
        color: ColorToken::EmeraldBlue,
    },
    ContentCard {
        title: "Digital Equity",
        description: "Bridging the digital education gap across linguistic and geographic boundaries",
        icon: IconRef::Rocket,
        color: ColorToken::EmeraldBlue,
    },
];

pub const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Alex Chen",
        role: "Flutter Developer",
        description: "Mobile app architect specializing in cross-platform development",
        icon: IconRef::Smartphone,
        color: ColorToken::BlueCyan,
    },
    TeamMember {
        name: "Priya Sharma",
        role: "Full Stack Developer",
        description: "MERN stack expert with AI/ML integration experience",
        icon: IconRef::Code,
        color: ColorToken::GreenEmerald,
    },
    TeamMember {
        name: "Rahul Patel",
        role: "Python AI Developer",
        description: "Machine learning engineer focused on NLP and translation models",
        icon: IconRef::Code,
        color: ColorToken::VioletPurple,
    },
    TeamMember {
        name: "Sarah Johnson",
        role: "UI/UX Designer",
        description: "Design systems expert with accessibility focus",
        icon: IconRef::Palette,
        color: ColorToken::PinkRose,
    },
    TeamMember {
        name: "Arjun Kumar",
        role: "Backend Developer",
        description: "Django specialist with cloud infrastructure expertise",
        icon: IconRef::Code,
        color: ColorToken::OrangeRed,
    },
    TeamMember {
        name: "Maya Singh",
        role: "Frontend Developer",
        description: "React expert with modern web technologies",
        icon: IconRef::Code,
        color: ColorToken::TealCyan,
    },
];

pub const TEAM_STATS: [Stat; 3] = [
    Stat { value: "6+", label: "Team Members" },
    Stat { value: "10+", label: "Years Combined Experience" },
    Stat { value: "5+", label: "Technologies Mastered" },
];

pub const CONTACT_TITLE: &str = "Join Our Mission";
pub const CONTACT_PITCH: &str = "Help us break down language barriers and make quality education accessible to everyone, everywhere.";
pub const CONTACT_ITEMS: [&str; 4] = [
    "Contribute to our open-source project",
    "Partner with us for implementation",
    "Provide feedback and suggestions",
    "Join our community of educators and developers",
];
pub const COMPETITION_NOTE: &str = "Competing for Innovation";

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "GitHub Repository", href: "#", icon: IconRef::Github },
    SocialLink { label: "Contact Email", href: "#", icon: IconRef::Mail },
    SocialLink { label: "LinkedIn", href: "#", icon: IconRef::Linkedin },
    SocialLink { label: "SIH 2025", href: "#", icon: IconRef::Trophy },
];

pub const FOOTER: [&str; 2] = [
    "© 2025 Team Binary DNF. Built with ❤ for Smart India Hackathon 2025",
    "Empowering education through AI-powered multilingual localization",
];

/// Metric targets in display order, as fed to the counters
pub fn metric_targets() -> Vec<i64> {
    METRICS.iter().map(|m| m.target).collect()
}

/// Format a counter value the way the page shows it, e.g. `500,000+`
pub fn format_metric(value: u64, suffix: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + suffix.len());
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(suffix);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_matches_index() {
        for (idx, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), idx);
        }
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(0, "+"), "0+");
        assert_eq!(format_metric(22, "+"), "22+");
        assert_eq!(format_metric(999, "%"), "999%");
        assert_eq!(format_metric(1_000, ""), "1,000");
        assert_eq!(format_metric(500_000, "+"), "500,000+");
        assert_eq!(format_metric(1_234_567, ""), "1,234,567");
    }

    #[test]
    fn test_metric_targets_are_valid_counter_targets() {
        assert_eq!(metric_targets(), vec![500_000, 80, 22, 95]);
        assert!(metric_targets().iter().all(|&t| t >= 0));
    }
}
