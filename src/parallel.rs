use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::slice;
        pub use rayon::prelude::*;
        pub fn opt_par_windows<T: Sync>(x: &[T], size: usize) -> slice::Windows<T> {
            x.par_windows(size)
        }

    } else {
        use std::slice;
        pub fn opt_par_windows<T>(x: &[T], size: usize) -> slice::Windows<T> {
            x.windows(size)
        }
    }
}
