//! Test cases and test utility functions.
//!

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use tempfile::{Builder, NamedTempFile};

// Random test VCF defaults
//
// The number of random records to use in tests; the tradeoff is
// catching stochastic errors vs test time.
pub const NRANDOM_RECORDS: usize = 1000;

// number of chromosome sequences
pub const NCHROM: usize = 22;

// chromosome sizes
pub const MAX_CHROM_LEN: i64 = 250_000_000;

/// A small, well-formed VCF used across tests: two samples, INFO flags,
/// lists, missing values, and FORMAT schema drift between records.
pub const EXAMPLE_VCF: &str = "\
##fileformat=VCFv4.2
##INFO=<ID=DP,Number=1,Type=Integer,Description=\"Total Depth\">
##INFO=<ID=AF,Number=A,Type=Float,Description=\"Allele Frequency\">
##INFO=<ID=DB,Number=0,Type=Flag,Description=\"dbSNP membership\">
##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">
##FORMAT=<ID=AD,Number=R,Type=Integer,Description=\"Allelic depths\">
##FORMAT=<ID=DP,Number=1,Type=Integer,Description=\"Read depth\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tHG00096\tHG00097
chr1\t100\trs123\tA\tT,G\t30\tPASS\tDP=50;AF=0.25,0.5;DB\tGT:AD:DP\t0/1:10,5,0:15\t0/0:20,0,0:20
chr1\t200\t.\tC\tT\t.\tq10\tDP=12\tGT:DP\t1/1:8\t0/1:9
chr2\t300\trs456\tG\tA\t99.5\tPASS\tAF=0.9;DB\tGT\t1|1\t.
chr2\t400\trs789\tT\t.\t10\tPASS\tDP=7\tGT:AD:DP\t./.:.:.\t0/0:5,0:5
";

/// Write `contents` to a temporary `.vcf` file.
pub fn temp_vcf_file(contents: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(".vcf")
        .tempfile()
        .expect("could not create temp file");
    file.write_all(contents.as_bytes())
        .expect("could not write temp file");
    file.flush().expect("could not flush temp file");
    file
}

/// Write a gzip-compressed copy of `filepath` to a temporary file.
///
/// The suffix is deliberately *not* `.gz`: detection must work from the
/// content alone.
pub fn gzip_copy(filepath: impl AsRef<Path>) -> NamedTempFile {
    let mut contents = Vec::new();
    File::open(filepath)
        .expect("could not open input")
        .read_to_end(&mut contents)
        .expect("could not read input");

    let file = Builder::new()
        .suffix(".vcf")
        .tempfile()
        .expect("could not create temp file");
    let mut encoder = GzEncoder::new(
        file.reopen().expect("could not reopen temp file"),
        Compression::default(),
    );
    encoder
        .write_all(&contents)
        .expect("could not write compressed copy");
    encoder.finish().expect("could not finish compression");
    file
}

/// Build a random VCF with `nrecords` data lines and one `GT:DP` genotype
/// column per sample in `samples`.
pub fn random_vcf(nrecords: usize, samples: &[&str]) -> String {
    let mut rng = thread_rng();
    let bases = ["A", "C", "G", "T"];
    let genotypes = ["0/0", "0/1", "1/1", "./."];

    let mut out = String::new();
    out.push_str("##fileformat=VCFv4.2\n");
    out.push_str("##source=vcfframe-test\n");
    out.push_str("#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO");
    if !samples.is_empty() {
        out.push_str("\tFORMAT");
        for sample in samples {
            out.push('\t');
            out.push_str(sample);
        }
    }
    out.push('\n');

    for i in 0..nrecords {
        let chrom = rng.gen_range(1..=NCHROM);
        let pos = rng.gen_range(1..MAX_CHROM_LEN);
        let ref_allele = bases.choose(&mut rng).unwrap();
        let alt = bases.choose(&mut rng).unwrap();
        out.push_str(&format!(
            "chr{}\t{}\trs{}\t{}\t{}\t{}\tPASS\tDP={};AF={:.3}",
            chrom,
            pos,
            i,
            ref_allele,
            alt,
            rng.gen_range(10..100),
            rng.gen_range(10..1000),
            rng.gen::<f64>(),
        ));
        if !samples.is_empty() {
            out.push_str("\tGT:DP");
            for _ in samples {
                out.push_str(&format!(
                    "\t{}:{}",
                    genotypes.choose(&mut rng).unwrap(),
                    rng.gen_range(0..100)
                ));
            }
        }
        out.push('\n');
    }
    out
}

/// A random VCF written to a temporary file.
pub fn random_vcf_file(nrecords: usize, samples: &[&str]) -> NamedTempFile {
    temp_vcf_file(&random_vcf(nrecords, samples))
}
