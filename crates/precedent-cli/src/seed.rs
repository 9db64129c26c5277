//! Sample data set loaded by `precedent seed` and `--memory`.

use precedent_domain::{Case, CaseRelationship, RelationshipType};
use precedent_store::{GraphStore, SchemaManager, StoreError};
use tracing::info;

/// The four sample cases
pub fn sample_cases() -> Vec<Case> {
    vec![
        Case::new(
            "roe_v_wade_1973",
            "Roe v. Wade",
            1973,
            "Supreme Court",
            "Landmark decision establishing constitutional right to abortion based on right to privacy.",
        )
        .with_principles(["Privacy", "Due Process", "Bodily Autonomy"]),
        Case::new(
            "dobbs_v_jackson_2022",
            "Dobbs v. Jackson Women's Health Organization",
            2022,
            "Supreme Court",
            "Overturned Roe v. Wade, holding that the Constitution does not confer a right to abortion.",
        )
        .with_principles(["Federalism", "Stare Decisis", "Constitutional Interpretation"]),
        Case::new(
            "hipaa_privacy_2018",
            "United States v. Health Center",
            2018,
            "District Court",
            "Healthcare provider penalized for unauthorized disclosure of protected health information.",
        )
        .with_principles(["Data Privacy", "Healthcare Compliance", "HIPAA"]),
        Case::new(
            "smith_v_medical_2020",
            "Smith v. Medical Center Inc.",
            2020,
            "Circuit Court",
            "Patient sued for unauthorized access to medical records by hospital staff.",
        )
        .with_principles(["Data Privacy", "Healthcare Compliance", "Damages"]),
    ]
}

/// Relationships between the sample cases
pub fn sample_relationships() -> Vec<CaseRelationship> {
    vec![
        CaseRelationship::new("dobbs_v_jackson_2022", "roe_v_wade_1973", RelationshipType::Overrules),
        CaseRelationship::new("smith_v_medical_2020", "hipaa_privacy_2018", RelationshipType::Cites),
        CaseRelationship::new(
            "smith_v_medical_2020",
            "hipaa_privacy_2018",
            RelationshipType::AppliesTo,
        ),
    ]
}

/// Declare constraints, then ingest the sample cases and relationships
///
/// Returns the number of cases ingested. Safe to run repeatedly.
pub async fn load_samples<S: GraphStore + ?Sized>(
    schema: &SchemaManager<S>,
) -> Result<usize, StoreError> {
    schema.initialize_schema().await?;

    let cases = sample_cases();
    for case in &cases {
        schema.ingest_case(case).await?;
    }
    for rel in sample_relationships() {
        schema.create_relationship(&rel.from, &rel.to, &rel.rel_type).await?;
    }

    info!("Loaded {} sample cases", cases.len());
    Ok(cases.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use precedent_store::MemoryStore;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_sample_cases_are_valid() {
        let cases = sample_cases();
        assert!(cases.iter().all(|c| c.validate().is_ok()));

        let ids: HashSet<_> = cases.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        for rel in sample_relationships() {
            assert!(ids.contains(rel.from.as_str()) && ids.contains(rel.to.as_str()));
        }
    }

    #[tokio::test]
    async fn test_load_samples_is_repeatable() {
        let store = Arc::new(MemoryStore::new());
        let schema = SchemaManager::new(Arc::clone(&store));

        assert_eq!(load_samples(&schema).await.unwrap(), 4);
        assert_eq!(load_samples(&schema).await.unwrap(), 4);

        assert_eq!(store.case_count(), 4);
        // "Data Privacy" and "Healthcare Compliance" are shared
        assert_eq!(store.principle_count(), 10);
        assert_eq!(
            store.relationship_count(
                "smith_v_medical_2020",
                "hipaa_privacy_2018",
                &RelationshipType::AppliesTo
            ),
            1
        );
    }
}
