// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sample gallery: random selection of the built-in sample pictures and
//! the exclusive "currently selected" marker.

use rand::Rng;

use crate::types::ImageReference;

/// Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Pick `m` distinct sample indices uniformly without replacement out of
/// `1..=n`: shuffle all `n` indices, take the prefix.
pub fn select_random_samples<R: Rng>(n: u32, m: usize, rng: &mut R) -> Vec<u32> {
    let mut indexes: Vec<u32> = (1..=n).collect();
    shuffle(&mut indexes, rng);
    indexes.truncate(m.min(n as usize));
    indexes
}

/// Static asset path for a sample index. Sample indices start at 1.
pub fn sample_path(index: u32) -> String {
    format!("samples/sample{index}.jpg")
}

/// One displayed thumbnail.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// 1-based sample index on the server.
    pub index: u32,
    /// Static asset path, e.g. `samples/sample18.jpg`.
    pub path: String,
    /// Whether this thumbnail carries the selection marker.
    pub selected: bool,
}

/// The set of sample thumbnails shown for one run, with at most one
/// marked as selected.
#[derive(Debug, Clone)]
pub struct SampleGallery {
    thumbnails: Vec<Thumbnail>,
}

impl SampleGallery {
    /// Draw a fresh random gallery of `m` out of `n` samples.
    pub fn random<R: Rng>(n: u32, m: usize, rng: &mut R) -> Self {
        let thumbnails = select_random_samples(n, m, rng)
            .into_iter()
            .map(|index| Thumbnail {
                index,
                path: sample_path(index),
                selected: false,
            })
            .collect();
        Self { thumbnails }
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    /// Mark the thumbnail at `pos` as selected, clearing the marker on
    /// every other thumbnail, and return the reference to guess over.
    /// Out-of-range positions leave the gallery untouched.
    pub fn select(&mut self, pos: usize) -> Option<ImageReference> {
        if pos >= self.thumbnails.len() {
            return None;
        }
        for (i, thumbnail) in self.thumbnails.iter_mut().enumerate() {
            thumbnail.selected = i == pos;
        }
        Some(ImageReference::Sample {
            path: self.thumbnails[pos].path.clone(),
        })
    }

    /// The currently selected thumbnail, if any.
    pub fn selected(&self) -> Option<&Thumbnail> {
        self.thumbnails.iter().find(|t| t.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..100).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, &mut rng);
        let mut one = vec![42];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_select_random_samples_30_8() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_random_samples(30, 8, &mut rng);
            assert_eq!(picked.len(), 8);
            let mut distinct = picked.clone();
            distinct.sort_unstable();
            distinct.dedup();
            assert_eq!(distinct.len(), 8, "duplicates in {picked:?}");
            assert!(picked.iter().all(|&k| (1..=30).contains(&k)));
        }
    }

    #[test]
    fn test_sample_path_naming() {
        assert_eq!(sample_path(1), "samples/sample1.jpg");
        assert_eq!(sample_path(18), "samples/sample18.jpg");
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut gallery = SampleGallery::random(30, 8, &mut rng);

        let first = gallery.select(2).unwrap();
        assert!(matches!(first, ImageReference::Sample { .. }));
        assert_eq!(gallery.selected().unwrap().index, gallery.thumbnails()[2].index);

        gallery.select(5).unwrap();
        let marked: Vec<usize> = gallery
            .thumbnails()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(marked, vec![5]);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut gallery = SampleGallery::random(30, 8, &mut rng);
        assert!(gallery.select(8).is_none());
        assert!(gallery.selected().is_none());
    }
}
