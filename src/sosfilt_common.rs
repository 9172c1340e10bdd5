/// Common seam for per-sample filter processors.
///
/// Any filter that can consume one sample and return one filtered
/// sample implements this trait, so sample-loop code can hold a
/// generic processor.
pub trait FilteredSample<T> {
    fn filtered_sample(&mut self, sample: T) -> T;
}
