mod sosfilt_common;
mod smod {
    pub mod filters {
        pub mod cascade;
        pub mod coeffstruct;
        pub mod filtertype;
    }
    pub mod tables;
}

// --- PUB USE ---

pub use sosfilt_common::FilteredSample;
pub use smod::filters::cascade::SosCascade;
pub use smod::filters::coeffstruct::SosCoeffs;
pub use smod::filters::filtertype::FilterError;
pub use smod::tables::NOTCH_874_48K;
