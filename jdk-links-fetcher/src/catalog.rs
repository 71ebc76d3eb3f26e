/// A JDK build lineage listed on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    /// Identifier understood by the disco API.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub recommended: bool,
}

pub const DISTRIBUTIONS: &[Distribution] = &[
    Distribution {
        id: "temurin",
        name: "Eclipse Temurin",
        description: "Most popular open-source JDK",
        recommended: true,
    },
    Distribution {
        id: "zulu",
        name: "Azul Zulu",
        description: "Enterprise-ready OpenJDK",
        recommended: true,
    },
    Distribution {
        id: "graalvm",
        name: "GraalVM",
        description: "High-performance JDK",
        recommended: true,
    },
    Distribution {
        id: "dragonwell",
        name: "Alibaba Dragonwell",
        description: "Alibaba's OpenJDK",
        recommended: true,
    },
    Distribution {
        id: "oracle_open_jdk",
        name: "Oracle OpenJDK",
        description: "Official OpenJDK builds",
        recommended: true,
    },
    Distribution {
        id: "corretto",
        name: "Amazon Corretto",
        description: "Production-ready OpenJDK",
        recommended: false,
    },
    Distribution {
        id: "liberica",
        name: "BellSoft Liberica",
        description: "Flexible OpenJDK builds",
        recommended: false,
    },
    Distribution {
        id: "microsoft",
        name: "Microsoft Build of OpenJDK",
        description: "Microsoft's OpenJDK",
        recommended: false,
    },
    Distribution {
        id: "sapmachine",
        name: "SapMachine",
        description: "SAP's OpenJDK",
        recommended: false,
    },
];

/// Versions highlighted on the landing page, independent of what is maintained.
pub const RECOMMENDED_VERSIONS: [u32; 3] = [17, 21, 25];

/// Oldest major version that is ever published.
pub const MIN_MAJOR_VERSION: u32 = 8;
