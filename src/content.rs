//! Static page content. Edit here to change what the site says.

pub const BRAND: &str = "Portfolio";
pub const CONTACT_EMAIL: &str = "you@example.com";

/// Sections of the page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Element id, also the `#fragment` links jump to
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "home",
            Self::About => ABOUT.id,
            Self::Projects => PROJECTS_SECTION.id,
            Self::Skills => SKILLS_SECTION.id,
            Self::Contact => CONTACT_SECTION.id,
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

/// Render order of the page
pub const PAGE: [Section; 5] = [
    Section::Hero,
    Section::About,
    Section::Projects,
    Section::Skills,
    Section::Contact,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Tentang", target: Section::About },
    NavLink { label: "Proyek", target: Section::Projects },
    NavLink { label: "Keahlian", target: Section::Skills },
    NavLink { label: "Kontak", target: Section::Contact },
];

/// Where the brand, hero and call-to-action links point
pub const BRAND_TARGET: Section = Section::Hero;
pub const PRIMARY_CTA_TARGET: Section = Section::Projects;
pub const CONTACT_TARGET: Section = Section::Contact;

pub struct HeroCopy {
    pub badge: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub initials: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    badge: "Tersedia untuk proyek freelance",
    headline: "Saya Bangun Website Modern yang Cepat dan Elegan",
    intro: "Developer front-end yang fokus pada performa, aksesibilitas, dan pengalaman pengguna yang menyenangkan. Saya membantu brand tampil beda melalui web yang dirancang dengan cermat.",
    primary_cta: "Lihat Proyek",
    secondary_cta: "Kontak",
    initials: "FB",
    name: "Flames.Blue",
    role: "Front-end Developer",
};

/// Heading block shared by every content section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionCopy {
    pub id: &'static str,
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const ABOUT: SectionCopy = SectionCopy {
    id: "about",
    eyebrow: "Tentang Saya",
    title: "Menciptakan antarmuka yang indah dan fungsional",
    subtitle: "Saya percaya bahwa detail kecil membuat perbedaan besar. Setiap komponen dirancang dengan presisi, diuji, dan dioptimalkan untuk performa.",
};

pub const ABOUT_BODY: &str = "Saya berpengalaman membangun SPA, landing page, dan dashboard modern. Terbiasa bekerja dengan tim menggunakan Git, code review, dan praktik terbaik industri.";

pub const PROJECTS_SECTION: SectionCopy = SectionCopy {
    id: "projects",
    eyebrow: "Portofolio",
    title: "Proyek Pilihan",
    subtitle: "Kumpulan karya yang menonjolkan kualitas desain, kerapian kode, dan pengalaman pengguna.",
};

pub const SKILLS_SECTION: SectionCopy = SectionCopy {
    id: "skills",
    eyebrow: "Keahlian",
    title: "Teknologi yang saya gunakan",
    subtitle: "Selalu mengikuti tren modern tanpa mengorbankan stabilitas dan kemudahan maintenance.",
};

pub const CONTACT_SECTION: SectionCopy = SectionCopy {
    id: "contact",
    eyebrow: "Kontak",
    title: "Mari berdiskusi tentang proyek Anda",
    subtitle: "Butuh landing page, dashboard, atau website perusahaan? Saya siap membantu mulai dari ide hingga peluncuran.",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub image: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Landing Page Modern",
        description: "Halaman promosi dengan animasi halus, desain responsif, dan performa tinggi menggunakan React + Tailwind.",
        tags: &["React", "Tailwind", "SEO"],
        link: "https://example.com",
        image: None,
    },
    Project {
        title: "Dashboard Analitik",
        description: "Dasbor data interaktif dengan grafik realtime dan filter dinamis, fokus pada kecepatan dan kejelasan.",
        tags: &["Charts", "API", "UX"],
        link: "https://example.com",
        image: None,
    },
    Project {
        title: "Aplikasi Portfolio",
        description: "Template portfolio pribadi yang elegan, mudah dikustomisasi, dan siap produksi.",
        tags: &["Portfolio", "Responsive", "Accessibility"],
        link: "https://example.com",
        image: None,
    },
];

pub const SKILLS: &[&str] = &[
    "JavaScript",
    "React",
    "Tailwind CSS",
    "Node.js",
    "REST API",
    "Git",
    "UI/UX",
];

pub const CONTACT_CTA: &str = "Hubungi Saya";
pub const CONTACT_SUBMIT: &str = "Kirim Pesan";
pub const CONTACT_NOTE: &str = "Ganti alamat email pada tombol kirim agar pesan masuk ke inbox Anda.";
pub const FOOTER_TAGLINE: &str = "Dibuat dengan cinta dan perhatian pada detail.";

/// Form action handing submission to the visitor's mail client
pub fn mailto_action() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}
