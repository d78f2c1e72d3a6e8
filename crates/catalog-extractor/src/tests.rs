//! End-to-end tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{BatchRunner, ExtractorConfig, RecordAssembler};
    use catalog_domain::traits::EntityRecognizer;
    use catalog_domain::{Document, EntityLabel, ExtractionRecord, Field};
    use catalog_recognizer::{MockRecognizer, RuleRecognizer};
    use std::fmt::Display;
    use std::sync::Arc;

    const SAMPLE: &str = "CS-101 meets Monday and Wednesday from 9:00 AM to 10:30 AM in Room 204B at Baker Hall";

    fn rules() -> RecordAssembler<RuleRecognizer> {
        RecordAssembler::new(Arc::new(RuleRecognizer::new()), ExtractorConfig::default())
    }

    fn extract<R>(assembler: &RecordAssembler<R>, text: &str) -> ExtractionRecord
    where
        R: EntityRecognizer,
        R::Error: Display,
    {
        let outcome = assembler.assemble(&Document::new("test", text));
        assert!(outcome.is_clean(), "unexpected faults: {:?}", outcome.faults);
        outcome.record
    }

    #[test]
    fn test_sample_sentence() {
        let record = extract(&rules(), SAMPLE);

        assert_eq!(record.get(Field::CourseCode), "CS-101");
        assert_eq!(record.get(Field::RoomNumber), "Room 204B");
        assert_eq!(record.get(Field::BuildingName), "Baker Hall");
        assert_eq!(record.get(Field::CourseSchedule), "Monday and Wednesday");
        assert_eq!(record.get(Field::CourseTiming), "9:00 AM to 10:30 AM");
        assert_eq!(record.get(Field::CourseName), "");
        assert_eq!(record.get(Field::ProfessorName), "");
        assert_eq!(record.get(Field::UniversityName), "");
        assert_eq!(record.get(Field::Modules), "");
    }

    #[test]
    fn test_quoted_course_names() {
        let record = extract(&rules(), r#"He teaches "Intro to AI" and "Data Structures""#);
        assert_eq!(record.get(Field::CourseName), "Intro to AI, Data Structures");
    }

    #[test]
    fn test_titled_professor_kept() {
        let record = extract(&rules(), "Dr. Jane Smith will teach the class");
        assert_eq!(record.get(Field::ProfessorName), "Dr.Jane Smith");
    }

    #[test]
    fn test_untitled_professor_dropped() {
        let record = extract(&rules(), "Jane Smith will teach the class");
        assert_eq!(record.get(Field::ProfessorName), "");
    }

    #[test]
    fn test_professor_prefix() {
        let record = extract(&rules(), "Taught by Professor Turing this year");
        assert_eq!(record.get(Field::ProfessorName), "Prof.Turing");
    }

    #[test]
    fn test_first_multi_token_university() {
        let recognizer = MockRecognizer::new()
            .with_entity("University", EntityLabel::Organization)
            .with_entity("Stanford University", EntityLabel::Organization)
            .with_entity("University of Michigan", EntityLabel::Organization);
        let assembler = RecordAssembler::new(Arc::new(recognizer), ExtractorConfig::default());

        let record = extract(
            &assembler,
            "The University welcomes you. Stanford University and University of Michigan.",
        );
        assert_eq!(record.get(Field::UniversityName), "Stanford University");
    }

    #[test]
    fn test_single_token_university_never_qualifies() {
        let recognizer = MockRecognizer::new().with_entity("University", EntityLabel::Organization);
        let assembler = RecordAssembler::new(Arc::new(recognizer), ExtractorConfig::default());

        let record = extract(&assembler, "Welcome to the University");
        assert_eq!(record.get(Field::UniversityName), "");
    }

    #[test]
    fn test_modules_from_both_templates() {
        let record = extract(
            &rules(),
            "Modules include Logic, Sets.\nModule 1 introduces proofs.",
        );
        assert_eq!(
            record.get(Field::Modules),
            "Logic, Sets, Module 1 introduces proofs."
        );
    }

    #[test]
    fn test_full_catalog_entry() {
        let text = "Stanford University offers CS-101 \"Intro to AI\" with Dr. Jane Smith \
                    on Tuesdays and Thursdays at 1:00 PM in Room 12 at Gates Building.\n\
                    Modules include Search, Planning.";
        let record = extract(&rules(), text);

        assert_eq!(
            record.as_row(),
            [
                "Stanford University",
                "CS-101",
                "Intro to AI",
                "Dr.Jane Smith",
                "Room 12",
                "Gates Building",
                "1:00 PM",
                "Tuesdays and Thursdays",
                "Search, Planning",
            ]
        );
    }

    #[test]
    fn test_row_round_trip_preserves_fields() {
        let record = extract(&rules(), SAMPLE);
        let row: Vec<String> = record.as_row().iter().map(|s| s.to_string()).collect();

        let restored = ExtractionRecord::from_row(row).unwrap();
        assert_eq!(restored, record);
        for (field, value) in restored.iter() {
            assert_eq!(value, record.get(field));
        }
    }

    #[tokio::test]
    async fn test_fault_in_one_document_does_not_change_others() {
        let texts = [
            "Dr. Jane Smith teaches CS-101 at Stanford University",
            "BROKEN Professor Alan Turing teaches MA-201",
            "CS-301 in Room 9 at Baker Hall on Fridays",
        ];
        let documents: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("doc-{}", i), *t))
            .collect();

        let healthy = BatchRunner::new(Arc::new(MockRecognizer::new()), ExtractorConfig::default())
            .run(documents.clone())
            .await;
        let faulty = BatchRunner::new(
            Arc::new(MockRecognizer::new().failing_on("BROKEN")),
            ExtractorConfig::default(),
        )
        .run(documents)
        .await;

        assert!(healthy.is_clean());
        assert_eq!(faulty.faulted_documents(), 1);
        assert!(faulty.faults.iter().all(|f| f.index == 1));
        assert_eq!(faulty.records[0], healthy.records[0]);
        assert_eq!(faulty.records[2], healthy.records[2]);
        assert_eq!(faulty.records[1].get(Field::CourseCode), "MA-201");
    }

    #[tokio::test]
    async fn test_batch_matches_single_document_assembly() {
        let texts = [SAMPLE, "Jane Smith will teach the class", ""];
        let documents: Vec<Document> = texts.iter().map(|t| Document::new("doc", *t)).collect();
        let assembler = rules();

        let report = BatchRunner::new(Arc::new(RuleRecognizer::new()), ExtractorConfig::default())
            .run(documents.clone())
            .await;

        let expected: Vec<ExtractionRecord> = documents
            .iter()
            .map(|d| assembler.assemble(d).record)
            .collect();
        assert_eq!(report.records, expected);
    }
}
