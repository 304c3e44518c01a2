use crate::field::Fr;

#[inline(always)]
pub fn dbg_fr(tag: &str, x: &Fr) {
    trace!("{:<18}: {}", tag, x.to_hex());
}

#[inline(always)]
pub fn dbg_state(tag: &str, xs: &[Fr]) {
    for (i, v) in xs.iter().enumerate() {
        trace!("{tag}[{i:02}] = {}", v.to_hex(), tag = tag, i = i);
    }
}
