use evaluation_metrics::edm::{Category, Surplus};

// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Yaml(::serde_yaml::Error);
        Json(::serde_json::Error);
    }

    errors {
        InvalidWeight(category: Category, value: f64) {
            description("invalid category weight")
            display("invalid weight for {} triples: {} (must be finite and non-negative)", category, value)
        }
        MisalignedCorpora(surplus: Surplus, n_pairs: usize) {
            description("gold and test corpora have different lengths")
            display("more {} items than {} items after {} aligned pairs", surplus, surplus.other(), n_pairs)
        }
    }
}
