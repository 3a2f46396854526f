//! Hamming-distance kernels used by the approximate occurrence counter.
//!
//! Short motifs go through a scalar loop that stops as soon as the mismatch
//! budget is exceeded. Patterns of 32 bytes or more use SSE2/AVX2 on x86_64.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Below this length the scalar early-exit loop wins
pub const SIMD_MIN_LEN: usize = 32;

#[cfg(target_arch = "x86_64")]
#[inline]
fn is_avx2_available() -> bool {
    #[cfg(target_feature = "avx2")]
    {
        true
    }
    #[cfg(not(target_feature = "avx2"))]
    {
        is_x86_feature_detected!("avx2")
    }
}

/// AVX2 mismatch count, 32 bytes per iteration with an SSE2 tail.
#[cfg(target_arch = "x86_64")]
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn hamming_distance_avx2_inner(a: &[u8], b: &[u8]) -> usize {
    let len = a.len().min(b.len());
    let mut dist = 0;
    let mut i = 0;

    while i + 32 <= len {
        let a_chunk = _mm256_loadu_si256(a.as_ptr().add(i) as *const __m256i);
        let b_chunk = _mm256_loadu_si256(b.as_ptr().add(i) as *const __m256i);
        let mask = _mm256_movemask_epi8(_mm256_cmpeq_epi8(a_chunk, b_chunk)) as u32;
        dist += 32 - mask.count_ones() as usize;
        i += 32;
    }

    dist + hamming_distance_sse2_inner(&a[i..len], &b[i..len])
}

/// SSE2 mismatch count, 16 bytes per iteration with a scalar tail.
#[cfg(target_arch = "x86_64")]
#[inline]
unsafe fn hamming_distance_sse2_inner(a: &[u8], b: &[u8]) -> usize {
    let len = a.len().min(b.len());
    let mut dist = 0;
    let mut i = 0;

    while i + 16 <= len {
        let a_chunk = _mm_loadu_si128(a.as_ptr().add(i) as *const __m128i);
        let b_chunk = _mm_loadu_si128(b.as_ptr().add(i) as *const __m128i);
        let mask = _mm_movemask_epi8(_mm_cmpeq_epi8(a_chunk, b_chunk)) as u32;
        dist += 16 - mask.count_ones() as usize;
        i += 16;
    }

    dist + hamming_distance_scalar(&a[i..len], &b[i..len])
}

#[inline]
fn hamming_distance_scalar(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Number of mismatching positions between two equal-length slices.
///
/// Only the common prefix is compared; callers pass equal lengths.
#[inline]
pub fn hamming_distance_simd(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len());

    #[cfg(target_arch = "x86_64")]
    {
        if a.len() >= 16 {
            // SSE2 is part of the x86_64 baseline
            return unsafe {
                if is_avx2_available() {
                    hamming_distance_avx2_inner(a, b)
                } else {
                    hamming_distance_sse2_inner(a, b)
                }
            };
        }
    }

    hamming_distance_scalar(a, b)
}

/// True when `a` and `b` differ at no more than `max_mismatches` positions.
#[inline]
pub fn within_distance(a: &[u8], b: &[u8], max_mismatches: usize) -> bool {
    if a.len() >= SIMD_MIN_LEN {
        return hamming_distance_simd(a, b) <= max_mismatches;
    }

    let mut mismatches = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            mismatches += 1;
            if mismatches > max_mismatches {
                return false;
            }
        }
    }
    true
}
