//! End-to-end validation of VCF → DataFrame conversion.

use vcfframe::prelude::*;
use vcfframe::test_utilities::{gzip_copy, random_vcf_file, temp_vcf_file};

const EXAMPLE_VCF: &str = "tests_data/example.vcf";

#[test]
fn test_row_per_data_line_in_order() {
    let df = vcf_to_dataframe(EXAMPLE_VCF, KeepSamples::None, false).unwrap();
    assert_eq!(df.height(), 4);

    let pos = df.column("pos").unwrap().i64().unwrap();
    let positions: Vec<i64> = pos.into_iter().map(|p| p.unwrap()).collect();
    assert_eq!(positions, vec![100, 200, 300, 400]);

    // fixed columns first, then INFO keys in first-seen order
    assert_eq!(
        df.get_column_names(),
        vec!["chrom", "pos", "id", "ref", "alt", "qual", "filter", "DP", "AF", "DB"]
    );
}

#[test]
fn test_gzip_and_plaintext_agree() {
    let gzipped = gzip_copy(EXAMPLE_VCF);

    let plain = vcf_to_dataframe(EXAMPLE_VCF, KeepSamples::All, true).unwrap();
    let compressed = vcf_to_dataframe(gzipped.path(), KeepSamples::All, true).unwrap();
    assert!(plain.equals_missing(&compressed));
}

#[test]
fn test_variant_only_mode() {
    // no samples selected: keep_format_data is irrelevant
    let df = vcf_to_dataframe(EXAMPLE_VCF, KeepSamples::None, true).unwrap();
    assert!(df
        .get_column_names()
        .iter()
        .all(|name| !name.starts_with("HG000")));
}

#[test]
fn test_missing_value_handling() {
    let df = vcf_to_dataframe(EXAMPLE_VCF, KeepSamples::None, false).unwrap();

    // `.` ID, QUAL, and ALT are nulls, not strings
    let id = df.column("id").unwrap().str().unwrap();
    assert_eq!(id.get(0), Some("rs123"));
    assert_eq!(id.get(1), None);
    let qual = df.column("qual").unwrap().f64().unwrap();
    assert_eq!(qual.get(1), None);
    assert_eq!(qual.get(2), Some(99.5));
    let alt = df.column("alt").unwrap().str().unwrap();
    assert_eq!(alt.get(0), Some("T,G"));
    assert_eq!(alt.get(3), None);

    // an INFO flag renders as `true`, and keys missing from a record are null
    let db = df.column("DB").unwrap().str().unwrap();
    assert_eq!(db.get(0), Some("true"));
    assert_eq!(db.get(1), None);
}

#[test]
fn test_single_sample_genotypes_only() {
    let df = vcf_to_dataframe(EXAMPLE_VCF, "HG00096", false).unwrap();

    // exactly one genotype-derived column, named after the sample
    let names = df.get_column_names();
    assert_eq!(*names.last().unwrap(), "HG00096");
    assert!(!names.contains(&"HG00097"));
    assert!(!names.iter().any(|name| name.starts_with("HG00096_")));

    let calls = df.column("HG00096").unwrap().str().unwrap();
    assert_eq!(calls.get(0), Some("0/1"));
    assert_eq!(calls.get(1), Some("1/1"));
    assert_eq!(calls.get(2), Some("1|1"));
    assert_eq!(calls.get(3), Some("./."));
}

#[test]
fn test_format_data_columns() {
    let df = vcf_to_dataframe(EXAMPLE_VCF, vec!["HG00096", "HG00097"], true).unwrap();

    // sample-major, keys in first-seen order
    let names = df.get_column_names();
    let genotype_columns = &names[10..];
    assert_eq!(
        genotype_columns,
        &["HG00096_GT", "HG00096_AD", "HG00096_DP", "HG00097_GT", "HG00097_AD", "HG00097_DP"]
    );

    // record 2 has FORMAT GT:DP, so AD is null there; record 3 has GT only
    let ad = df.column("HG00096_AD").unwrap().str().unwrap();
    assert_eq!(ad.get(0), Some("10,5,0"));
    assert_eq!(ad.get(1), None);
    let dp = df.column("HG00097_DP").unwrap().str().unwrap();
    assert_eq!(dp.get(2), None);

    // HG00097's bare `.` field on record 3 is null, not an error
    let gt = df.column("HG00097_GT").unwrap().str().unwrap();
    assert_eq!(gt.get(2), None);
}

#[test]
fn test_multiallelic_record_with_format_data() {
    let contents = "\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tHG00096\tHG00097
chr1\t100\t.\tA\tT,G\t30\tPASS\tDP=50\tGT:AD\t0/1:10,5\t0/0:20,0
";
    let vcf = temp_vcf_file(contents);
    let df = vcf_to_dataframe(vcf.path(), "HG00096", true).unwrap();

    assert_eq!(df.height(), 1);
    let alt = df.column("alt").unwrap().str().unwrap();
    assert_eq!(alt.get(0), Some("T,G"));
    let dp = df.column("DP").unwrap().str().unwrap();
    assert_eq!(dp.get(0), Some("50"));
    let gt = df.column("HG00096_GT").unwrap().str().unwrap();
    assert_eq!(gt.get(0), Some("0/1"));
    let ad = df.column("HG00096_AD").unwrap().str().unwrap();
    assert_eq!(ad.get(0), Some("10,5"));
    assert!(df
        .get_column_names()
        .iter()
        .all(|name| !name.starts_with("HG00097")));
}

#[test]
fn test_unknown_sample_produces_no_table() {
    match vcf_to_dataframe(EXAMPLE_VCF, "Z", false) {
        Err(VcfFrameError::UnknownSample(name)) => assert_eq!(name, "Z"),
        Ok(_) => panic!("conversion should have failed"),
        Err(e) => panic!("expected UnknownSample, got {e}"),
    }
}

#[test]
fn test_all_samples_in_header_order() {
    let df = vcf_to_dataframe(EXAMPLE_VCF, KeepSamples::All, false).unwrap();
    let names = df.get_column_names();
    let n = names.len();
    assert_eq!(&names[n - 2..], &["HG00096", "HG00097"]);
}

#[test]
fn test_skip_policy_accounts_for_every_bad_line() {
    let contents = "\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
chr1\t100\t.\tA\tT\t30\tPASS\tDP=50
chr1\tbad\t.\tC\tG\t30\tPASS\tDP=50
chr1\t300\t.\tG\tA\tlow\tPASS\tDP=50
chr1\t400\t.\tT\tC\t30\tPASS\tDP=50
";
    let vcf = temp_vcf_file(contents);

    let conversion = vcf_to_dataframe_with_policy(
        vcf.path(),
        KeepSamples::None,
        false,
        BadLinePolicy::Skip,
    )
    .unwrap();
    assert_eq!(conversion.frame.height(), 2);
    let lines: Vec<u64> = conversion.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![3, 4]);
}

#[test]
fn test_random_vcf_round_trips_row_count() {
    let samples = ["S1", "S2", "S3"];
    let vcf = random_vcf_file(500, &samples);
    let df = vcf_to_dataframe(vcf.path(), KeepSamples::All, true).unwrap();
    assert_eq!(df.height(), 500);
    assert_eq!(available_samples(vcf.path()).unwrap(), samples);
}
