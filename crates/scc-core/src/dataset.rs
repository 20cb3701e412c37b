//! # Provider Dataset
//!
//! The static list of fourteen cloud offerings: the single source of truth
//! for names, categories, performance scores and SOV sub-scores. Control
//! scores are derived from the sub-scores when the dataset is built; the
//! `expected control` column in the seed table below is checked by tests.
//!
//! Also provides the public-mode anonymization (category prefix + ordinal)
//! and the legend grouping.

use serde::Serialize;

use crate::category::ProviderCategory;
use crate::criteria::{SovCriterion, SovereigntyScores, SOV_CRITERION_COUNT};
use crate::provider::{Provider, ProviderId};

struct Seed {
    id: &'static str,
    name: &'static str,
    category: ProviderCategory,
    performance: u8,
    /// SOV-1 … SOV-8.
    sov: [u8; SOV_CRITERION_COUNT],
    group_index: Option<u8>,
    description: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "aws",
        name: "AWS",
        category: ProviderCategory::Hyperscaler,
        performance: 95,
        sov: [30, 15, 40, 55, 30, 50, 75, 60], // 42
        group_index: Some(0),
        description: "Broadest portfolio of infrastructure and platform services with an excellent developer experience.",
    },
    Seed {
        id: "microsoft-azure",
        name: "Microsoft Azure",
        category: ProviderCategory::Hyperscaler,
        performance: 95,
        sov: [30, 15, 40, 55, 30, 50, 75, 60], // 42
        group_index: Some(1),
        description: "Powerful cloud ecosystem with an extensive IaaS/PaaS portfolio and the largest partner landscape.",
    },
    Seed {
        id: "google-cloud",
        name: "Google Cloud",
        category: ProviderCategory::Hyperscaler,
        performance: 95,
        sov: [30, 15, 40, 55, 30, 50, 75, 60], // 42
        group_index: Some(2),
        description: "Strong in container management, AI services and workplace solutions.",
    },
    Seed {
        id: "oracle-cloud",
        name: "Oracle Cloud",
        category: ProviderCategory::Hyperscaler,
        performance: 70,
        sov: [35, 15, 35, 50, 30, 45, 70, 55], // 40
        group_index: None,
        description: "Particular strengths in databases, with extensive security and compliance options.",
    },
    Seed {
        id: "aws-european-sovereign-cloud",
        name: "AWS European Sovereign Cloud",
        category: ProviderCategory::Sovereign,
        performance: 90,
        sov: [75, 75, 85, 90, 75, 80, 90, 70], // 80
        group_index: None,
        description: "Built to keep operating through geopolitical crises, run by EU-resident staff under EU control.",
    },
    Seed {
        id: "microsoft-delos-cloud",
        name: "Microsoft DELOS Cloud",
        category: ProviderCategory::Sovereign,
        performance: 65,
        sov: [85, 90, 90, 90, 80, 80, 90, 75], // 85
        group_index: None,
        description: "Designed for German public administration with full data sovereignty and no US access path.",
    },
    Seed {
        id: "stackit",
        name: "STACKIT",
        category: ProviderCategory::EuRegional,
        performance: 75,
        sov: [95, 95, 90, 90, 85, 85, 90, 90], // 89.5 -> 90
        group_index: None,
        description: "Cloud platform of the Schwarz Group focused on German mid-sized businesses.",
    },
    Seed {
        id: "ionos-cloud",
        name: "IONOS Cloud",
        category: ProviderCategory::EuRegional,
        performance: 65,
        sov: [70, 85, 70, 65, 55, 55, 70, 65], // 65
        group_index: None,
        description: "Largest German cloud provider with GDPR-compliant infrastructure.",
    },
    Seed {
        id: "open-telekom-cloud",
        name: "Open Telekom Cloud",
        category: ProviderCategory::EuRegional,
        performance: 55,
        sov: [60, 80, 60, 55, 40, 45, 60, 60], // 55
        group_index: None,
        description: "Deutsche Telekom cloud based on OpenStack for regulated industries.",
    },
    Seed {
        id: "openstack-private-cloud",
        name: "OpenStack Private Cloud",
        category: ProviderCategory::Private,
        performance: 35,
        sov: [100, 100, 100, 100, 100, 100, 100, 100], // 100
        group_index: None,
        description: "Open-source private cloud with full transparency and no vendor lock-in.",
    },
    Seed {
        id: "vmware-private-cloud",
        name: "VMware Private Cloud",
        category: ProviderCategory::Private,
        performance: 20,
        sov: [70, 90, 95, 95, 80, 80, 95, 90], // 85
        group_index: None,
        description: "Proven enterprise virtualization with full operational control.",
    },
    Seed {
        id: "google-dedicated-cloud",
        name: "Google Dedicated Cloud",
        category: ProviderCategory::Hybrid,
        performance: 70,
        sov: [80, 85, 90, 95, 80, 80, 90, 80], // 84.75 -> 85
        group_index: None,
        description: "Fully isolated Google Cloud without internet connectivity for the highest security needs.",
    },
    Seed {
        id: "azure-stack-hci",
        name: "Azure Stack HCI",
        category: ProviderCategory::Hybrid,
        performance: 60,
        sov: [45, 45, 65, 70, 45, 50, 75, 60], // 55
        group_index: None,
        description: "Hybrid cloud solution bringing Azure services on-premises.",
    },
    Seed {
        id: "aws-outpost",
        name: "AWS Outpost",
        category: ProviderCategory::Hybrid,
        performance: 65,
        sov: [40, 40, 60, 65, 40, 45, 70, 55], // 50
        group_index: None,
        description: "AWS services in your own data centre for a consistent hybrid experience.",
    },
];

/// Number of providers in the dataset.
pub const PROVIDER_COUNT: usize = 14;

impl Seed {
    fn build(&self) -> Provider {
        let mut provider = Provider::new(
            ProviderId::from_static(self.id),
            self.name,
            self.category,
            self.performance,
            SovereigntyScores::from_ordered(self.sov),
            self.description,
        );
        provider.group_index = self.group_index;
        provider
    }
}

/// A fresh, owned copy of every provider in dataset order.
pub fn base_providers() -> Vec<Provider> {
    SEEDS.iter().map(Seed::build).collect()
}

/// Look up a provider by id.
pub fn provider_by_id(id: &str) -> Option<Provider> {
    SEEDS.iter().find(|s| s.id == id).map(Seed::build)
}

/// All providers of one category, in dataset order.
pub fn providers_by_category(category: ProviderCategory) -> Vec<Provider> {
    SEEDS
        .iter()
        .filter(|s| s.category == category)
        .map(Seed::build)
        .collect()
}

// ---------------------------------------------------------------------------
// Per-provider explanations
// ---------------------------------------------------------------------------

type Explanations = [(SovCriterion, &'static str)];

const HYPERSCALER_EXPLANATIONS: &Explanations = &[
    (SovCriterion::Strategic, "US-headquartered group; strategic decisions are taken outside the EU."),
    (SovCriterion::Legal, "Subject to the US CLOUD Act and FISA 702 regardless of data location."),
    (SovCriterion::DataAi, "EU regions and customer-managed keys are available, but the provider retains operational access."),
    (SovCriterion::Operational, "Operated by a global workforce with follow-the-sun support."),
    (SovCriterion::SupplyChain, "Proprietary hardware and software stack controlled by the US parent."),
    (SovCriterion::Technology, "Rich managed services with significant proprietary lock-in."),
    (SovCriterion::Security, "Extensive certification portfolio including BSI C5 and ISO 27001."),
    (SovCriterion::Sustainability, "Published renewable-energy commitments; limited per-region reporting."),
];

const AWS_ESC_EXPLANATIONS: &Explanations = &[
    (SovCriterion::Strategic, "Separate EU legal entity with an EU-resident management board."),
    (SovCriterion::Legal, "Contractual and technical separation from the US parent; residual group exposure remains."),
    (SovCriterion::DataAi, "Data, metadata and keys stay within the EU sovereign partition."),
    (SovCriterion::Operational, "Operated exclusively by EU-resident staff; able to run without US connectivity."),
    (SovCriterion::SupplyChain, "Hardware and software largely shared with the global platform."),
    (SovCriterion::Technology, "Same APIs as the global cloud; portability comparable to other hyperscalers."),
    (SovCriterion::Security, "Dedicated EU security operations centre and independent audits."),
    (SovCriterion::Sustainability, "Covered by the group's renewable-energy programme."),
];

const DELOS_EXPLANATIONS: &Explanations = &[
    (SovCriterion::Strategic, "Operated by a German SAP subsidiary acting as data trustee."),
    (SovCriterion::Legal, "No access path for the US technology supplier under German administration law."),
    (SovCriterion::DataAi, "Data held exclusively in German data centres under trustee control."),
    (SovCriterion::Operational, "Run by security-cleared German personnel."),
    (SovCriterion::SupplyChain, "Depends on Microsoft software updates delivered through a vetting gateway."),
    (SovCriterion::Technology, "Azure-compatible services with a delayed feature set."),
    (SovCriterion::Security, "Built for BSI requirements and classified public-sector workloads."),
    (SovCriterion::Sustainability, "Sustainability reporting follows the operator's German obligations."),
];

const STACKIT_EXPLANATIONS: &Explanations = &[
    (SovCriterion::Strategic, "Owned by the Schwarz Group with headquarters in Germany."),
    (SovCriterion::Legal, "Exclusively subject to German and EU law."),
    (SovCriterion::DataAi, "Data and AI workloads hosted in German and Austrian data centres."),
    (SovCriterion::Operational, "Operated and supported by in-house staff within the EU."),
    (SovCriterion::SupplyChain, "Mostly EU-sourced services; commodity hardware from global vendors."),
    (SovCriterion::Technology, "Built on open-source components with standard APIs."),
    (SovCriterion::Security, "BSI C5 attested with ISO 27001 certification."),
    (SovCriterion::Sustainability, "Data centres powered by renewable energy."),
];

const IONOS_EXPLANATIONS: &Explanations = &[
    (SovCriterion::Strategic, "German-listed company with majority ownership by a German group."),
    (SovCriterion::Legal, "Subject to German and EU law only."),
    (SovCriterion::DataAi, "Data residency in Germany with customer-controlled encryption."),
    (SovCriterion::Operational, "Operations and support based in Germany."),
    (SovCriterion::SupplyChain, "Proprietary virtualization; hardware from global vendors."),
    (SovCriterion::Technology, "Limited managed-service breadth reduces portability risk but also choice."),
    (SovCriterion::Security, "BSI C5 attested; IT-Grundschutz certified data centres."),
    (SovCriterion::Sustainability, "Green-power contracts for German sites."),
];

const OPENSTACK_EXPLANATIONS: &Explanations = &[
    (SovCriterion::Strategic, "Fully owned and governed by the operating organisation."),
    (SovCriterion::Legal, "Only the operator's own jurisdiction applies."),
    (SovCriterion::DataAi, "All data and models remain on self-operated infrastructure."),
    (SovCriterion::Operational, "Operated entirely by the organisation's own staff."),
    (SovCriterion::SupplyChain, "Open-source stack with freely selectable hardware suppliers."),
    (SovCriterion::Technology, "Open source under the OpenInfra Foundation; no vendor lock-in."),
    (SovCriterion::Security, "Security level is fully determined and auditable by the operator."),
    (SovCriterion::Sustainability, "Energy sourcing is chosen by the operator."),
];

/// Provider-specific explanation text per criterion, when available.
///
/// The three hyperscalers share one explanation set.
pub fn sov_explanations(id: &str) -> Option<&'static Explanations> {
    match id {
        "aws" | "microsoft-azure" | "google-cloud" => Some(HYPERSCALER_EXPLANATIONS),
        "aws-european-sovereign-cloud" => Some(AWS_ESC_EXPLANATIONS),
        "microsoft-delos-cloud" => Some(DELOS_EXPLANATIONS),
        "stackit" => Some(STACKIT_EXPLANATIONS),
        "ionos-cloud" => Some(IONOS_EXPLANATIONS),
        "openstack-private-cloud" => Some(OPENSTACK_EXPLANATIONS),
        _ => None,
    }
}

/// Explanation for one criterion of one provider, falling back to the
/// generic criterion description.
pub fn sov_explanation(id: &str, criterion: SovCriterion) -> &'static str {
    sov_explanations(id)
        .and_then(|entries| entries.iter().find(|(c, _)| *c == criterion))
        .map(|(_, text)| *text)
        .unwrap_or_else(|| criterion.description())
}

/// SOV sub-scores of a dataset provider by id.
pub fn sov_scores(id: &str) -> Option<SovereigntyScores> {
    SEEDS
        .iter()
        .find(|s| s.id == id)
        .map(|s| SovereigntyScores::from_ordered(s.sov))
}

// ---------------------------------------------------------------------------
// Anonymization and legend
// ---------------------------------------------------------------------------

/// Relabel providers with category-prefixed ordinal codes (`H1`, `S2`, …).
///
/// The ordinal counts providers of the same category up to and including
/// the current one, in input order. Ids and scores are unchanged.
pub fn anonymize(providers: &[Provider]) -> Vec<Provider> {
    let mut counters = [0usize; crate::category::CATEGORY_COUNT];
    providers
        .iter()
        .map(|p| {
            let slot = category_slot(p.category);
            counters[slot] += 1;
            Provider {
                name: format!("{}{}", p.category.anonymous_prefix(), counters[slot]),
                ..p.clone()
            }
        })
        .collect()
}

fn category_slot(category: ProviderCategory) -> usize {
    match category {
        ProviderCategory::Hyperscaler => 0,
        ProviderCategory::Sovereign => 1,
        ProviderCategory::EuRegional => 2,
        ProviderCategory::Private => 3,
        ProviderCategory::Hybrid => 4,
    }
}

/// One legend row: a category and the names of its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// The category.
    pub category: ProviderCategory,
    /// Category color.
    pub color: &'static str,
    /// Category label.
    pub label: &'static str,
    /// Member display names in input order.
    pub members: Vec<String>,
}

/// Group providers into one legend entry per category, in category order.
pub fn legend(providers: &[Provider]) -> Vec<LegendEntry> {
    ProviderCategory::all()
        .iter()
        .map(|category| LegendEntry {
            category: *category,
            color: category.color(),
            label: category.label(),
            members: providers
                .iter()
                .filter(|p| p.category == *category)
                .map(|p| p.name.clone())
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_expected_size_and_unique_valid_ids() {
        let providers = base_providers();
        assert_eq!(providers.len(), PROVIDER_COUNT);
        let mut ids: Vec<&str> = providers.iter().map(|p| p.id.as_str()).collect();
        for id in &ids {
            assert!(ProviderId::new(*id).is_ok(), "{id}");
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROVIDER_COUNT);
    }

    #[test]
    fn derived_control_matches_published_scores() {
        let expected = [
            ("aws", 42),
            ("microsoft-azure", 42),
            ("google-cloud", 42),
            ("oracle-cloud", 40),
            ("aws-european-sovereign-cloud", 80),
            ("microsoft-delos-cloud", 85),
            ("stackit", 90),
            ("ionos-cloud", 65),
            ("open-telekom-cloud", 55),
            ("openstack-private-cloud", 100),
            ("vmware-private-cloud", 85),
            ("google-dedicated-cloud", 85),
            ("azure-stack-hci", 55),
            ("aws-outpost", 50),
        ];
        for (id, control) in expected {
            let p = provider_by_id(id).unwrap();
            assert_eq!(p.control, control, "{id}");
        }
    }

    #[test]
    fn hyperscaler_group_indices() {
        assert_eq!(provider_by_id("aws").unwrap().group_index, Some(0));
        assert_eq!(provider_by_id("microsoft-azure").unwrap().group_index, Some(1));
        assert_eq!(provider_by_id("google-cloud").unwrap().group_index, Some(2));
        assert_eq!(provider_by_id("oracle-cloud").unwrap().group_index, None);
    }

    #[test]
    fn providers_by_category_counts() {
        assert_eq!(providers_by_category(ProviderCategory::Hyperscaler).len(), 4);
        assert_eq!(providers_by_category(ProviderCategory::Sovereign).len(), 2);
        assert_eq!(providers_by_category(ProviderCategory::EuRegional).len(), 3);
        assert_eq!(providers_by_category(ProviderCategory::Private).len(), 2);
        assert_eq!(providers_by_category(ProviderCategory::Hybrid).len(), 3);
    }

    #[test]
    fn unknown_id_lookup() {
        assert!(provider_by_id("nope").is_none());
        assert!(sov_scores("nope").is_none());
    }

    #[test]
    fn anonymize_uses_category_ordinals() {
        let names: Vec<String> = anonymize(&base_providers())
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "H1", "H2", "H3", "H4", "S1", "S2", "E1", "E2", "E3", "P1", "P2", "Y1", "Y2", "Y3"
            ]
        );
    }

    #[test]
    fn anonymize_keeps_ids_and_scores() {
        let base = base_providers();
        let anon = anonymize(&base);
        for (a, b) in base.iter().zip(&anon) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.control, b.control);
            assert_eq!(a.performance, b.performance);
        }
    }

    #[test]
    fn explanation_falls_back_to_criterion_description() {
        assert_eq!(
            sov_explanation("oracle-cloud", SovCriterion::Legal),
            SovCriterion::Legal.description()
        );
        assert_ne!(
            sov_explanation("stackit", SovCriterion::Legal),
            SovCriterion::Legal.description()
        );
    }

    #[test]
    fn explanation_sets_cover_every_criterion() {
        for id in ["aws", "aws-european-sovereign-cloud", "stackit", "openstack-private-cloud"] {
            let entries = sov_explanations(id).unwrap();
            for c in SovCriterion::all() {
                assert!(entries.iter().any(|(k, _)| k == c), "{id} missing {c}");
            }
        }
    }

    #[test]
    fn legend_groups_members_by_category() {
        let entries = legend(&anonymize(&base_providers()));
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].members, vec!["H1", "H2", "H3", "H4"]);
        assert_eq!(entries[4].members, vec!["Y1", "Y2", "Y3"]);
        let full = legend(&base_providers());
        assert_eq!(full[1].members, vec!["AWS European Sovereign Cloud", "Microsoft DELOS Cloud"]);
    }
}
