//! Copy shown on the landing page.

pub const PRODUCT_NAME: &str = "Converge";
pub const TAGLINE: &str = "Pomodoro on Mac. Real focus.";
pub const AUTHOR_NAME: &str = "polterware";
pub const AUTHOR_URL: &str = "https://www.polterware.com";

#[derive(Debug, Clone, Copy)]
pub enum Icon {
    Timer,
    BarChart,
    ClipboardList,
    LayoutPanelLeft,
    Bell,
    Palette,
    Smartphone,
    Monitor,
}

impl Icon {
    /// Emoji stand-in rendered inside the icon badge
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Timer => "⏱",
            Icon::BarChart => "📊",
            Icon::ClipboardList => "📋",
            Icon::LayoutPanelLeft => "🗔",
            Icon::Bell => "🔔",
            Icon::Palette => "🎨",
            Icon::Smartphone => "📱",
            Icon::Monitor => "🖥",
        }
    }
}

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Timer,
        title: "Pomodoro Timer",
        description: "Configurable work and break cycles: 25 min focus, 5 min short break, long break after 4 pomodoros. Automatic or manual mode between phases.",
    },
    Feature {
        icon: Icon::BarChart,
        title: "Statistics",
        description: "Pomodoro counter per day, week and month. Productivity charts for the last 14 days. Everything visible in the menu bar and dedicated tab.",
    },
    Feature {
        icon: Icon::ClipboardList,
        title: "Session history",
        description: "Record of completed sessions with date, time and duration. Track your progress over time.",
    },
    Feature {
        icon: Icon::LayoutPanelLeft,
        title: "Menu bar and compact window",
        description: "Timer always visible in the menu bar. Quick Start, Pause and Reset. Compact window to not interrupt your flow.",
    },
    Feature {
        icon: Icon::Bell,
        title: "Notifications and sound",
        description: "Alerts at the end of work and break. Configurable sound for each type of completion.",
    },
    Feature {
        icon: Icon::Palette,
        title: "Themes",
        description: "Light, dark or system appearance. Distinct colors for work and break.",
    },
];

pub struct Screenshot {
    /// Path relative to the public asset directory
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SCREENSHOTS: &[Screenshot] = &[
    Screenshot {
        src: "pomodoro.png",
        alt: "Pomodoro timer view",
        title: "Pomodoro",
        description: "Focus timer with clear work and break phases.",
    },
    Screenshot {
        src: "stats.png",
        alt: "Statistics view",
        title: "Statistics",
        description: "Charts that show how your focus evolves over time.",
    },
    Screenshot {
        src: "history.png",
        alt: "History view",
        title: "History",
        description: "Detailed list of previous sessions to keep track of progress.",
    },
];

pub struct Rationale {
    pub icon: Icon,
    pub title: &'static str,
    /// Body split around the emphasized phrase: (before, emphasis, after)
    pub body: (&'static str, &'static str, &'static str),
}

pub const RATIONALE: &[Rationale] = &[
    Rationale {
        icon: Icon::Smartphone,
        title: "Phone nearby = less focus",
        body: (
            "Studies show that the ",
            "mere presence",
            " of a smartphone reduces available cognitive capacity, even with the device turned off. The brain spends resources to suppress thoughts about the device, and less is left for the task at hand.",
        ),
    },
    Rationale {
        icon: Icon::Monitor,
        title: "Desktop keeps the phone away",
        body: (
            "With the timer on Mac, you don't need your phone on the desk. Those who leave the phone in ",
            "another room",
            " tend to perform better than those who keep it in their pocket or on the desk, and much better than those who leave it in sight.",
        ),
    },
];

pub struct Reference {
    pub label: &'static str,
    pub url: &'static str,
    pub title: &'static str,
    pub venue: Option<&'static str>,
    pub note: Option<&'static str>,
}

pub const REFERENCES: &[Reference] = &[
    Reference {
        label: "Ward et al. (2017)",
        url: "https://www.journals.uchicago.edu/doi/full/10.1086/691462",
        title: "Brain Drain: The Mere Presence of One's Own Smartphone Reduces Available Cognitive Capacity",
        venue: Some("Journal of Consumer Research"),
        note: None,
    },
    Reference {
        label: "UT Austin (2017)",
        url: "https://news.utexas.edu/2017/06/26/the-mere-presence-of-your-smartphone-reduces-brain-power/",
        title: "The Mere Presence of Your Smartphone Reduces Brain Power",
        venue: None,
        note: None,
    },
    Reference {
        label: "Scientific Reports (2023)",
        url: "https://www.nature.com/articles/s41598-023-36256-4",
        title: "The mere presence of a smartphone reduces basal attentional performance",
        venue: None,
        note: Some("replication with ~800 participants"),
    },
];
