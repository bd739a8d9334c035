//! Static profile content shared by the homepage and the terminal.

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub summary_one: &'static str,
    pub summary_two: &'static str,
    pub resume_path: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineItem {
    pub period: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub label: &'static str,
    /// Brand color as `#RRGGBB`.
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Mohamed Wael",
    role: "Full-Stack Developer",
    summary_one: "Focuses on shipping clean, accessible UIs with React. I build responsive \
features, leverage headless components (shadcn/ui), and care deeply about UX. While also \
building backend services with NestJS maintaining clean code and good practices for complex logic.",
    summary_two: "Previously, I freelanced building Discord bots and internal tools. I hold a \
dual BSc in Software Engineering (UEL, UK & Ain Shams University, EG), with honours and a CGPA of 3.76",
    resume_path: "/Mohamed_Wael_Resume.pdf",
};

pub const EDUCATION_ITEMS: &[TimelineItem] = &[TimelineItem {
    period: "Oct '21 - Jul '25",
    title: "BSc Software Engineering (Dual Degree) with honours and CGPA 3.76",
    description: "University of East London (UK) & Faculty of Computer and Information \
Sciences, Ain Shams University (EG).",
}];

pub const EXPERIENCE_ITEMS: &[TimelineItem] = &[
    TimelineItem {
        period: "Jan '24 - Present",
        title: "Full-Stack Developer, StorkTech (Cairo, EG)",
        description: "Built responsive front-end with React/Vite; used shadcn/ui; focused on \
UX/accessibility; delivered invoicing system with translation logs and fallback mechanisms \
using NestJS and PrismaORM.",
    },
    TimelineItem {
        period: "Dec '23 - Jan '25",
        title: "Freelance Developer",
        description: "Commissioned Discord bots using discord.py/discord.js and internal \
automation tools.",
    },
    TimelineItem {
        period: "Sept '23",
        title: "Full-Stack Intern, Hypercell (Cairo, EG)",
        description: "Spring Boot + Angular training; shipped a simple blog web app; received \
recommendation letter.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Task Manager RESTful API",
        description: "Built a RESTful API in NestJS with both TypeORM and Prisma layers to \
practice the framework and persistence patterns.",
        tags: &["NestJS", "TypeScript", "TypeORM", "Prisma"],
        github_url: Some("https://github.com/MohamedWael3011/task-manager-api"),
    },
    Project {
        title: "Software Landing Page Website",
        description: "Modern landing page to practice frontend skills and animation using \
React + GSAP.",
        tags: &["React", "GSAP", "Vite"],
        github_url: Some("https://github.com/MohamedWael3011/software-company-demo"),
    },
    Project {
        title: "Simple Blog API",
        description: "Java Spring Boot API implemented during the Hypercell internship.",
        tags: &["Java", "Spring Boot"],
        github_url: Some("https://github.com/MohamedWael3011/BlogProject"),
    },
    Project {
        title: "GoomMemer - Discord Bot",
        description: "Commissioned Discord bot that generates memes/wallpapers using image \
processing techniques.",
        tags: &["Python", "Discord.py", "Pillow"],
        github_url: Some("https://github.com/MohamedWael3011/Goom"),
    },
    Project {
        title: "Saraha - Anonymous Chat App",
        description: "Data structures course project; Windows GUI built with WinForms.",
        tags: &["C++", "WinForms"],
        github_url: Some("https://github.com/MohamedWael3011/SarahaWithGUI"),
    },
    Project {
        title: "Game Farming Tracker",
        description: "Desktop tool for Pokemon encounter tracking using OpenCV with a \
Tkinter UI.",
        tags: &["Python", "OpenCV", "Tkinter"],
        github_url: Some("https://github.com/MohamedWael3011/PROFarmTracker"),
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { label: "HTML", color: "#E34F26" },
    Skill { label: "CSS", color: "#1572B6" },
    Skill { label: "Tailwind", color: "#38BDF8" },
    Skill { label: "React", color: "#61DAFB" },
    Skill { label: "Shadcn/ui", color: "#000000" },
    Skill { label: "TypeScript", color: "#3178C6" },
    Skill { label: "Node.js", color: "#68A063" },
    Skill { label: "Three.js", color: "#000000" },
    Skill { label: "Vite", color: "#FF00FF" },
    Skill { label: "Prisma", color: "#000000" },
    Skill { label: "NestJS", color: "#E0234E" },
    Skill { label: "Redis", color: "#DC382D" },
    Skill { label: "PostgreSQL", color: "#31648C" },
    Skill { label: "AWS", color: "#232F3E" },
    Skill { label: "Git", color: "#F05032" },
    Skill { label: "GitHub", color: "#181717" },
    Skill { label: "Jira", color: "#0052CC" },
    Skill { label: "Figma", color: "#F24E1E" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/mohamed-wael-71885a249/",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/MohamedWael3011",
    },
    SocialLink {
        label: "Discord",
        url: "https://discord.com/invite/GD5z49vg",
    },
];

pub const WELCOME: &str = "Welcome you geek :D, I hope you enjoy your stay ^-^ Type help to begin.";

pub const PROMPT: &str = "wael's terminal@ wael-portfolio:~$";

pub const ASCII_TEXT: &str = r#" __        __            _
 \ \      / /_ _  ___  | |
  \ \ /\ / / _` |/ _ \ | |
   \ V  V / (_| |  __/ | |
    \_/\_/ \__,_|\___| |_|"#;

pub const ASCII_ART: &str = r#"   .-------------------.
   |  > hello, world_  |
   |                   |
   '-------------------'
          _|___|_
        [_________]"#;

pub const ASCII_ANYA: &str = r#"      .--.   .--.
     ( (  `-'  ) )
      \ ^     ^ /
       |  o o  |
       \   w   /
      .-'-----'-.
     /  WAKU WAKU \"#;

/// Parse `#RRGGBB` into its components.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
