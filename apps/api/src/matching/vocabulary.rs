//! Skill vocabulary: the ordered catalog of canonical skill names that every
//! downstream matching stage recognizes.
//!
//! The vocabulary is data, not code. The built-in table covers the common
//! software stack (~150 entries across seven domains); deployments can swap
//! it out with `SKILL_VOCAB_PATH` pointing at a JSON array of `SkillEntry`
//! without touching the algorithm. Entry order is load order and is
//! meaningful: matched/missing lists and gap recommendations follow it.

use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Domain grouping for a canonical skill. Closed set; drives the category
/// breakdown in match results and the cross-category recommendation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Databases,
    CloudDevops,
    DataMl,
    Tools,
}

impl SkillCategory {
    /// All categories in declaration order.
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Languages,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Databases,
        SkillCategory::CloudDevops,
        SkillCategory::DataMl,
        SkillCategory::Tools,
    ];

    /// Human-readable label used in recommendations and API responses.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "programming languages",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Databases => "databases",
            SkillCategory::CloudDevops => "cloud and devops",
            SkillCategory::DataMl => "data and machine learning",
            SkillCategory::Tools => "tools and practices",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One canonical skill: its single normalized spelling, its domain, and the
/// alternate spellings that collapse into it during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Ordered, immutable catalog of canonical skills. Built once at startup and
/// shared read-only; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<SkillEntry>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from explicit entries, keeping first occurrence of
    /// any duplicated canonical name so load order stays authoritative.
    pub fn new(entries: Vec<SkillEntry>) -> Self {
        let mut seen: Vec<String> = Vec::with_capacity(entries.len());
        let entries = entries
            .into_iter()
            .filter(|e| {
                let name = e.name.trim().to_lowercase();
                if name.is_empty() || seen.contains(&name) {
                    return false;
                }
                seen.push(name);
                true
            })
            .collect();
        Self { entries }
    }

    /// The built-in catalog, ordered by category then by entry.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .flat_map(|(category, skills)| {
                skills.iter().map(|(name, aliases)| SkillEntry {
                    name: (*name).to_string(),
                    category: *category,
                    aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
                })
            })
            .collect();
        Self::new(entries)
    }

    /// Loads a replacement vocabulary from a JSON array of `SkillEntry`.
    pub fn from_json_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary file '{path}'"))?;
        let entries: Vec<SkillEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Skill vocabulary file '{path}' is not a valid entry list"))?;
        anyhow::ensure!(!entries.is_empty(), "Skill vocabulary file '{path}' is empty");
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category of a canonical name, if the name is in the catalog.
    pub fn category_of(&self, name: &str) -> Option<SkillCategory> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.category)
    }

    /// All (alias, canonical) pairs, in catalog order.
    pub fn alias_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|e| {
            e.aliases
                .iter()
                .map(move |a| (a.as_str(), e.name.as_str()))
        })
    }
}

/// Built-in skill catalog. Canonical names are the normalized spellings the
/// extractor reports; aliases are folded into them before extraction.
#[rustfmt::skip]
const BUILTIN: &[(SkillCategory, &[(&str, &[&str])])] = &[
    (SkillCategory::Languages, &[
        ("python", &["python3", "py"]),
        ("java", &[]),
        ("javascript", &["js", "ecmascript", "es6"]),
        ("typescript", &["ts"]),
        ("c++", &["cpp", "c plus plus"]),
        ("c#", &["csharp", "c sharp", "dotnet"]),
        ("go", &["golang"]),
        ("rust", &[]),
        ("kotlin", &[]),
        ("swift", &[]),
        ("ruby", &[]),
        ("php", &[]),
        ("scala", &[]),
        ("r", &[]),
        ("matlab", &[]),
        ("perl", &[]),
        ("dart", &[]),
        ("elixir", &[]),
        ("haskell", &[]),
        ("lua", &[]),
        ("bash", &["shell scripting"]),
        ("powershell", &["power shell"]),
        ("groovy", &[]),
    ]),
    (SkillCategory::Frontend, &[
        ("react", &["reactjs", "react.js", "react js"]),
        ("angular", &["angularjs", "angular.js"]),
        ("vue", &["vuejs", "vue.js", "vue js"]),
        ("svelte", &["sveltejs"]),
        ("html", &["html5"]),
        ("css", &["css3"]),
        ("sass", &["scss"]),
        ("tailwind", &["tailwindcss", "tailwind css"]),
        ("bootstrap", &[]),
        ("webpack", &[]),
        ("vite", &[]),
        ("next.js", &["nextjs", "next js"]),
        ("nuxt", &["nuxtjs", "nuxt.js"]),
        ("gatsby", &[]),
        ("redux", &[]),
        ("jquery", &[]),
        ("react native", &["reactnative", "react-native"]),
        ("flutter", &[]),
        ("remix", &[]),
        ("astro", &[]),
    ]),
    (SkillCategory::Backend, &[
        ("node.js", &["nodejs", "node js", "node"]),
        ("express", &["expressjs", "express.js"]),
        ("fastapi", &["fast api"]),
        ("django", &["django rest framework", "drf"]),
        ("flask", &[]),
        ("spring boot", &["springboot", "spring"]),
        ("asp.net", &["aspnet", "asp net"]),
        ("rails", &["ruby on rails", "ror"]),
        ("laravel", &[]),
        ("gin", &[]),
        ("fiber", &[]),
        ("nestjs", &["nest.js", "nest js"]),
        ("phoenix", &[]),
        ("symfony", &[]),
        ("grpc", &[]),
    ]),
    (SkillCategory::Databases, &[
        ("sql", &[]),
        ("mysql", &["my sql"]),
        ("postgresql", &["postgres", "postgre sql"]),
        ("mongodb", &["mongo", "mongo db"]),
        ("redis", &[]),
        ("cassandra", &[]),
        ("elasticsearch", &["elastic search"]),
        ("dynamodb", &["dynamo db"]),
        ("oracle", &[]),
        ("sqlite", &["sqlite3"]),
        ("mariadb", &["maria db"]),
        ("neo4j", &[]),
        ("couchdb", &["couch db"]),
        ("clickhouse", &["click house"]),
        ("snowflake", &[]),
        ("supabase", &[]),
    ]),
    (SkillCategory::CloudDevops, &[
        ("aws", &["amazon web services", "amazon aws"]),
        ("azure", &["microsoft azure", "ms azure"]),
        ("gcp", &["google cloud platform", "google cloud"]),
        ("docker", &[]),
        ("kubernetes", &["k8s", "kube"]),
        ("jenkins", &[]),
        ("gitlab ci", &["gitlab ci/cd", "gitlab-ci"]),
        ("github actions", &[]),
        ("terraform", &[]),
        ("ansible", &[]),
        ("circleci", &["circle ci"]),
        ("heroku", &[]),
        ("vercel", &[]),
        ("netlify", &[]),
        ("linux", &[]),
        ("nginx", &[]),
        ("prometheus", &[]),
        ("grafana", &[]),
        ("helm", &[]),
        ("istio", &[]),
        ("rabbitmq", &["rabbit mq"]),
        ("firebase", &["google firebase"]),
        ("openshift", &["open shift"]),
    ]),
    (SkillCategory::DataMl, &[
        ("machine learning", &["ml"]),
        ("deep learning", &["neural networks"]),
        ("tensorflow", &["tensor flow"]),
        ("pytorch", &["py torch", "torch"]),
        ("scikit-learn", &["sklearn", "scikit learn"]),
        ("pandas", &[]),
        ("numpy", &[]),
        ("data analysis", &["data analytics"]),
        ("computer vision", &[]),
        ("nlp", &["natural language processing"]),
        ("keras", &[]),
        ("opencv", &["open cv"]),
        ("spark", &["apache spark", "pyspark"]),
        ("hadoop", &["apache hadoop"]),
        ("kafka", &["apache kafka"]),
        ("airflow", &["apache airflow"]),
        ("etl", &[]),
        ("statistics", &[]),
        ("jupyter", &["jupyter notebook"]),
        ("matplotlib", &[]),
        ("xgboost", &[]),
        ("tableau", &[]),
        ("power bi", &["powerbi"]),
    ]),
    (SkillCategory::Tools, &[
        ("git", &[]),
        ("github", &[]),
        ("bitbucket", &[]),
        ("jira", &[]),
        ("confluence", &[]),
        ("postman", &[]),
        ("swagger", &["openapi"]),
        ("api", &["apis"]),
        ("rest", &["rest api", "restful"]),
        ("graphql", &["graph ql"]),
        ("microservices", &["micro services", "microservice"]),
        ("agile", &[]),
        ("scrum", &[]),
        ("cicd", &["ci/cd", "ci cd", "continuous integration", "continuous delivery"]),
        ("testing", &[]),
        ("unit testing", &["unit tests"]),
        ("integration testing", &["integration tests"]),
        ("jest", &[]),
        ("pytest", &["py test"]),
        ("selenium", &[]),
        ("cypress", &[]),
        ("junit", &[]),
    ]),
];
