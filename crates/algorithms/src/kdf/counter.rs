use byteorder::{BigEndian, ByteOrder};
use digest::{Digest, FixedOutputReset, Output};
use zeroize::Zeroize;

use eccore_api::DerivationFunction;
use eccore_common::{SecretVec, ZeroizeGuard};

use super::DerivationParameters;
use crate::error::{validate, Error, Result};

const CONTEXT: &str = "counter KDF";

enum Layout {
    /// Counter persists across calls; `next` is held wide to detect overflow
    Counter { nonce: Option<Vec<u8>>, next: u64 },
    /// Counter restarts at 1 on every call
    Kdf2 { shared_info: Vec<u8> },
}

struct State {
    z: SecretVec,
    layout: Layout,
}

impl Drop for State {
    fn drop(&mut self) {
        self.z.zeroize();
        match &mut self.layout {
            Layout::Counter { nonce, next } => {
                nonce.zeroize();
                *next = 0;
            }
            Layout::Kdf2 { shared_info } => shared_info.zeroize(),
        }
    }
}

/// Counter-based key stream over any fixed-output digest.
pub struct CounterKdf<D: Digest + FixedOutputReset> {
    digest: D,
    state: Option<State>,
}

impl<D: Digest + FixedOutputReset> CounterKdf<D> {
    pub fn new() -> Self {
        Self {
            digest: D::new(),
            state: None,
        }
    }

    /// Output size of one block in bytes.
    pub fn block_size() -> usize {
        <D as Digest>::output_size()
    }

    /// Counter value the next block will use, if initialised in counter mode.
    pub fn next_counter(&self) -> Option<u32> {
        match self.state.as_ref().map(|s| &s.layout) {
            Some(Layout::Counter { next, .. }) => u32::try_from(*next).ok(),
            _ => None,
        }
    }
}

impl<D: Digest + FixedOutputReset> Default for CounterKdf<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest + FixedOutputReset> DerivationFunction for CounterKdf<D> {
    type Parameters = DerivationParameters;

    fn init(&mut self, params: DerivationParameters) -> Result<()> {
        let (z, layout) = match params {
            DerivationParameters::Counter(p) => {
                log::debug!(
                    "{} initialised in counter mode at {} ({} nonce)",
                    CONTEXT,
                    p.start_counter,
                    if p.nonce.is_some() { "with" } else { "no" }
                );
                (
                    p.z.clone(),
                    Layout::Counter {
                        nonce: p.nonce.clone(),
                        next: u64::from(p.start_counter),
                    },
                )
            }
            DerivationParameters::Kdf2(p) => {
                log::debug!("{} initialised in KDF2 mode", CONTEXT);
                (
                    p.z.clone(),
                    Layout::Kdf2 {
                        shared_info: p.shared_info.clone(),
                    },
                )
            }
        };
        Digest::reset(&mut self.digest);
        self.state = Some(State { z, layout });
        Ok(())
    }

    fn generate_bytes(&mut self, out: &mut [u8], offset: usize, len: usize) -> Result<usize> {
        let state = validate::initialized(self.state.as_mut(), CONTEXT)?;
        validate::output_capacity(CONTEXT, offset, len, out.len())?;

        let block_len = <D as Digest>::output_size();
        let blocks = len.div_ceil(block_len) as u64;

        let (mut counter, suffix) = match &state.layout {
            Layout::Counter { nonce, next } => (*next, nonce.as_deref().unwrap_or(&[])),
            Layout::Kdf2 { shared_info } => (1, shared_info.as_slice()),
        };
        if counter + blocks > u64::from(u32::MAX) + 1 {
            return Err(Error::CounterExhausted { context: CONTEXT });
        }

        let mut scratch = SecretVec::zeroed(block_len);
        let mut block = ZeroizeGuard::new(&mut scratch);
        let mut ctr = [0u8; 4];

        for chunk in out[offset..offset + len].chunks_mut(block_len) {
            BigEndian::write_u32(&mut ctr, counter as u32);
            Digest::update(&mut self.digest, state.z.as_slice());
            Digest::update(&mut self.digest, ctr);
            Digest::update(&mut self.digest, suffix);
            Digest::finalize_into_reset(
                &mut self.digest,
                Output::<D>::from_mut_slice(block.as_mut_slice()),
            );
            chunk.copy_from_slice(&block.as_slice()[..chunk.len()]);
            block.as_mut_slice().zeroize();
            counter += 1;
        }

        if let Layout::Counter { next, .. } = &mut state.layout {
            *next = counter;
        }
        log::trace!("{} produced {} bytes in {} blocks", CONTEXT, len, blocks);
        Ok(len)
    }

    fn reset(&mut self) {
        Digest::reset(&mut self.digest);
        self.state = None;
    }
}
