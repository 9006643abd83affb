//! Transform output in split real/imaginary form.

/// Sample rate the original capture pipeline runs at, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 40_000;

/// Complex spectrum of a length-`L` transform.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    /// Real parts, one per bin.
    pub re: Vec<f64>,
    /// Imaginary parts, one per bin.
    pub im: Vec<f64>,
}

impl Spectrum {
    /// All-zero spectrum with `len` bins.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self {
            re: vec![0.0; len],
            im: vec![0.0; len],
        }
    }

    /// Number of bins.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    /// `true` for a zero-length spectrum.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// `|X_k|` for the non-redundant half of a real-input spectrum,
    /// bins `0..=L/2`. Mismatched `re`/`im` are cut to the shorter one.
    #[must_use]
    pub fn magnitudes(&self) -> Vec<f64> {
        let len = self.re.len().min(self.im.len());
        let useful = (len / 2 + 1).min(len);
        self.re[..useful]
            .iter()
            .zip(&self.im[..useful])
            .map(|(r, i)| r.hypot(*i))
            .collect()
    }
}
