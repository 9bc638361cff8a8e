//! Raw codeword tables for the spectral and scale-factor Huffman codebooks.
//!
//! Each codebook is stored as parallel `codes`/`bits` arrays indexed by symbol.
//! A bit length of zero marks an unused symbol.

use crate::utils::huffman::HuffmanSource;

#[rustfmt::skip]
const SPECTRUM_A_2_0_CODES: [u16; 16] = [
    0, 0, 0, 1, 3, 7, 0, 4, 0, 0, 0, 0, 2, 5, 0, 6,
];

#[rustfmt::skip]
const SPECTRUM_A_2_0_BITS: [u8; 16] = [
     0,  3,  0,  3,  3,  3,  0,  3,  0,  0,  0,  0,  3,  3,  0,  3,
];

#[rustfmt::skip]
const SPECTRUM_A_2_1_CODES: [u16; 256] = [
      0,   2,   0,   3,  16,  60,   0,  63,   0,   0,   0,   0,  17,  62,   0,  61,
     14,   0,   0,  57,  24,  38,   0, 117,   0,   0,   0,   0,  27,  36,   0, 109,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     15,  56,   0,   1,  26, 108,   0,  37,   0,   0,   0,   0,  25, 116,   0,  39,
     22,  20,   0,  23, 118,   6,   0,   9,   0,   0,   0,   0,  53, 100,   0, 111,
     38,   4,   0,  99,  34, 162,   0, 151,   0,   0,   0,   0, 103, 160,   0,  13,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     43,  82,   0,  11,  32, 146,   0, 145,   0,   0,   0,   0,  97,  14,   0, 149,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     23,  22,   0,  21,  52, 110,   0, 101,   0,   0,   0,   0, 119,   8,   0,   7,
     42,  10,   0,  83,  96, 148,   0,  15,   0,   0,   0,   0,  33, 144,   0, 147,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     39,  98,   0,   5, 102,  12,   0, 161,   0,   0,   0,   0,  35, 150,   0, 163,
];

#[rustfmt::skip]
const SPECTRUM_A_2_1_BITS: [u8; 256] = [
     0,  4,  0,  4,  5,  6,  0,  6,  0,  0,  0,  0,  5,  6,  0,  6,
     5,  6,  0,  6,  6,  7,  0,  7,  0,  0,  0,  0,  6,  7,  0,  7,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     5,  6,  0,  6,  6,  7,  0,  7,  0,  0,  0,  0,  6,  7,  0,  7,
     5,  6,  0,  6,  7,  7,  0,  7,  0,  0,  0,  0,  6,  7,  0,  7,
     6,  7,  0,  7,  7,  8,  0,  8,  0,  0,  0,  0,  7,  8,  0,  7,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     6,  7,  0,  7,  7,  8,  0,  8,  0,  0,  0,  0,  7,  7,  0,  8,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     5,  6,  0,  6,  6,  7,  0,  7,  0,  0,  0,  0,  7,  7,  0,  7,
     6,  7,  0,  7,  7,  8,  0,  7,  0,  0,  0,  0,  7,  8,  0,  8,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     6,  7,  0,  7,  7,  7,  0,  8,  0,  0,  0,  0,  7,  8,  0,  8,
];

#[rustfmt::skip]
const SPECTRUM_A_2_2_CODES: [u16; 256] = [
      6,   2,   0,   3,  22,  30,   0,  33,   0,   0,   0,   0,  23,  32,   0,  31,
     28,  84,   0,  39,  16, 166,   0,  39,   0,   0,   0,   0,  21, 164,   0,  45,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     29,  38,   0,  85,  20,  44,   0, 165,   0,   0,   0,   0,  17,  38,   0, 167,
     30,   0,   0,   3,  74, 116,   0, 113,   0,   0,   0,   0,  35,  10,   0,   9,
     24, 114,   0,  13, 162, 346,   0, 291,   0,   0,   0,   0,  15, 344,   0,  93,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     27, 174,   0, 119, 146, 320,   0, 289,   0,   0,   0,   0,  37,  94,   0, 323,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     31,   2,   0,   1,  34,   8,   0,  11,   0,   0,   0,   0,  75, 112,   0, 117,
     26, 118,   0, 175,  36, 322,   0,  95,   0,   0,   0,   0, 147, 288,   0, 321,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     25,  12,   0, 115,  14,  92,   0, 345,   0,   0,   0,   0, 163, 290,   0, 347,
];

#[rustfmt::skip]
const SPECTRUM_A_2_2_BITS: [u8; 256] = [
     3,  4,  0,  4,  5,  6,  0,  6,  0,  0,  0,  0,  5,  6,  0,  6,
     5,  7,  0,  6,  6,  8,  0,  7,  0,  0,  0,  0,  6,  8,  0,  7,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     5,  6,  0,  7,  6,  7,  0,  8,  0,  0,  0,  0,  6,  7,  0,  8,
     5,  6,  0,  6,  7,  8,  0,  8,  0,  0,  0,  0,  6,  7,  0,  7,
     6,  8,  0,  7,  8,  9,  0,  9,  0,  0,  0,  0,  7,  9,  0,  8,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     6,  8,  0,  8,  8,  9,  0,  9,  0,  0,  0,  0,  7,  8,  0,  9,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     5,  6,  0,  6,  6,  7,  0,  7,  0,  0,  0,  0,  7,  8,  0,  8,
     6,  8,  0,  8,  7,  9,  0,  8,  0,  0,  0,  0,  8,  9,  0,  9,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     6,  7,  0,  8,  7,  8,  0,  9,  0,  0,  0,  0,  8,  9,  0,  9,
];

#[rustfmt::skip]
const SPECTRUM_A_2_3_CODES: [u16; 256] = [
      2,   2,   0,   3,  30,  16,   0,  19,   0,   0,   0,   0,  31,  18,   0,  17,
     26,  48,   0,  27,   0, 100,   0, 193,   0,   0,   0,   0,   3,  82,   0, 125,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     27,  26,   0,  49,   2, 124,   0,  83,   0,   0,   0,   0,   1, 192,   0, 101,
     28,  98,   0, 101,  42, 408,   0, 411,   0,   0,   0,   0,  23, 120,   0, 123,
      4, 254,   0, 119,  80, 826,   0, 505,   0,   0,   0,   0, 115, 824,   0, 225,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      7, 102,   0, 391, 414, 776,   0, 779,   0,   0,   0,   0, 117, 226,   0, 507,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     29, 100,   0,  99,  22, 122,   0, 121,   0,   0,   0,   0,  43, 410,   0, 409,
      6, 390,   0, 103, 116, 506,   0, 227,   0,   0,   0,   0, 415, 778,   0, 777,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      5, 118,   0, 255, 114, 224,   0, 825,   0,   0,   0,   0,  81, 504,   0, 827,
];

#[rustfmt::skip]
const SPECTRUM_A_2_3_BITS: [u8; 256] = [
     2,  4,  0,  4,  5,  6,  0,  6,  0,  0,  0,  0,  5,  6,  0,  6,
     5,  7,  0,  6,  6,  8,  0,  8,  0,  0,  0,  0,  6,  8,  0,  8,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     5,  6,  0,  7,  6,  8,  0,  8,  0,  0,  0,  0,  6,  8,  0,  8,
     5,  7,  0,  7,  7,  9,  0,  9,  0,  0,  0,  0,  6,  8,  0,  8,
     6,  9,  0,  8,  8, 10,  0, 10,  0,  0,  0,  0,  8, 10,  0,  9,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     6,  8,  0,  9,  9, 10,  0, 10,  0,  0,  0,  0,  8,  9,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     5,  7,  0,  7,  6,  8,  0,  8,  0,  0,  0,  0,  7,  9,  0,  9,
     6,  9,  0,  8,  8, 10,  0,  9,  0,  0,  0,  0,  9, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     6,  8,  0,  9,  8,  9,  0, 10,  0,  0,  0,  0,  8, 10,  0, 10,
];

#[rustfmt::skip]
const SPECTRUM_A_3_0_CODES: [u16; 64] = [
      0,   0,   2,  24,   0,  25,   3,   0,   0,   0,  18,   2,   0,   9,  21,   0,
     26,  10,  62,  44,   0,  47,   1,  13,  14,  56,  32, 120,   0, 123,  35,  59,
      0,   0,   0,   0,   0,   0,   0,   0,  15,  58,  34, 122,   0, 121,  33,  57,
     27,  12,   0,  46,   0,  45,  63,  11,   0,   0,  20,   8,   0,   3,  19,   0,
];

#[rustfmt::skip]
const SPECTRUM_A_3_0_BITS: [u8; 64] = [
     0,  0,  4,  5,  0,  5,  4,  0,  0,  0,  5,  5,  0,  5,  5,  0,
     5,  5,  6,  6,  0,  6,  5,  5,  5,  6,  6,  7,  0,  7,  6,  6,
     0,  0,  0,  0,  0,  0,  0,  0,  5,  6,  6,  7,  0,  7,  6,  6,
     5,  5,  5,  6,  0,  6,  6,  5,  0,  0,  5,  5,  0,  5,  5,  0,
];

#[rustfmt::skip]
const SPECTRUM_A_3_1_CODES: [u16; 64] = [
     13,  24,  22,  58,   0,  59,  23,  25,  18,  62,   8,  28,   0,  27,   7,   1,
     16,   2,  40, 120,   0, 123,  31,   5,  42,  22, 114,  42,   0,  41, 113,  25,
      0,   0,   0,   0,   0,   0,   0,   0,  43,  24, 112,  40,   0,  43, 115,  23,
     17,   4,  30, 122,   0, 121,  41,   3,  19,   0,   6,  26,   0,  29,   9,  63,
];

#[rustfmt::skip]
const SPECTRUM_A_3_1_BITS: [u8; 64] = [
     4,  5,  5,  6,  0,  6,  5,  5,  5,  6,  5,  6,  0,  6,  5,  5,
     5,  5,  6,  7,  0,  7,  6,  5,  6,  6,  7,  7,  0,  7,  7,  6,
     0,  0,  0,  0,  0,  0,  0,  0,  6,  6,  7,  7,  0,  7,  7,  6,
     5,  5,  6,  7,  0,  7,  6,  5,  5,  5,  5,  6,  0,  6,  5,  6,
];

#[rustfmt::skip]
const SPECTRUM_A_3_2_CODES: [u16; 64] = [
      5,   6,  16,   8,   0,   9,  17,   7,   4,  18,  62, 106,   0, 109,  61,  25,
      6,  58,   6,   2,   0,   1,   5,  57,   2,  22, 220,  42,   0,  41, 223, 105,
      0,   0,   0,   0,   0,   0,   0,   0,   3, 104, 222,  40,   0,  43, 221,  23,
      7,  56,   4,   0,   0,   3,   7,  59,   5,  24,  60, 108,   0, 107,  63,  19,
];

#[rustfmt::skip]
const SPECTRUM_A_3_2_BITS: [u8; 64] = [
     3,  4,  5,  6,  0,  6,  5,  4,  4,  5,  6,  7,  0,  7,  6,  5,
     5,  6,  6,  7,  0,  7,  6,  6,  6,  7,  8,  8,  0,  8,  8,  7,
     0,  0,  0,  0,  0,  0,  0,  0,  6,  7,  8,  8,  0,  8,  8,  7,
     5,  6,  6,  7,  0,  7,  6,  6,  4,  5,  6,  7,  0,  7,  6,  5,
];

#[rustfmt::skip]
const SPECTRUM_A_3_3_CODES: [u16; 64] = [
      0,  10,  10,  52,   0,  53,  11,  11,   8,  28,  50, 218,   0, 221,  53,  31,
      8,  30,  58, 108,   0,  99,  57,  49,  50, 110,  96, 890,   0, 889, 447, 217,
      0,   0,   0,   0,   0,   0,   0,   0,  51, 216, 446, 888,   0, 891,  97, 111,
      9,  48,  56,  98,   0, 109,  59,  31,   9,  30,  52, 220,   0, 219,  51,  29,
];

#[rustfmt::skip]
const SPECTRUM_A_3_3_BITS: [u8; 64] = [
     2,  4,  5,  7,  0,  7,  5,  4,  4,  5,  6,  8,  0,  8,  6,  5,
     5,  6,  7,  8,  0,  8,  7,  6,  7,  8,  8, 10,  0, 10,  9,  8,
     0,  0,  0,  0,  0,  0,  0,  0,  7,  8,  9, 10,  0, 10,  8,  8,
     5,  6,  7,  8,  0,  8,  7,  6,  4,  5,  6,  8,  0,  8,  6,  5,
];

#[rustfmt::skip]
const SPECTRUM_A_4_0_CODES: [u16; 256] = [
      0,   0,   0,   0,  24,  14,  94,  40,   0,  41,  95,  15,  25,   0,   0,   0,
      0,   0,   0,   0, 118, 110,  62,   4,   0,  23,  69, 123,  19,   0,   0,   0,
      0,   0,   0,   0,  74,  72,  16, 206,   0, 225,  35,  85,  83,   0,   0,   0,
      0,   0,   0,   0,   8,  24, 214, 158,   0, 157, 229,  43,  27,   0,   0,   0,
    124,  92,  56, 252,   2, 210, 154,  92,   0, 107, 163, 217,  15, 255,  61,  97,
    116,  86,  54,   0, 204, 140,  88, 482,   0,  15,  95, 161, 213,  13,  59,  89,
     64,  20, 218, 182, 132,  64, 480, 406,   0, 417,  13,  67, 135, 199, 227,  11,
    242, 196, 142,  90,  36, 460, 404, 360,   0, 363, 419, 463,  39, 105, 153, 201,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    243, 200, 152, 104,  38, 462, 418, 362,   0, 361, 405, 461,  37,  91, 143, 197,
     65,  10, 226, 198, 134,  66,  12, 416,   0, 407, 481,  65, 133, 183, 219,  21,
    117,  88,  58,  12, 212, 160,  94,  14,   0, 483,  89, 141, 205,   1,  55,  87,
    125,  96,  60, 254,  14, 216, 162, 106,   0,  93, 155, 211,   3, 253,  57,  93,
      0,   0,   0,   0,  26,  42, 228, 156,   0, 159, 215,  25,   9,   0,   0,   0,
      0,   0,   0,   0,  82,  84,  34, 224,   0, 207,  17,  73,  75,   0,   0,   0,
      0,   0,   0,   0,  18, 122,  68,  22,   0,   5,  63, 111, 119,   0,   0,   0,
];

#[rustfmt::skip]
const SPECTRUM_A_4_0_BITS: [u8; 256] = [
     0,  0,  0,  0,  6,  6,  7,  7,  0,  7,  7,  6,  6,  0,  0,  0,
     0,  0,  0,  0,  7,  7,  7,  7,  0,  7,  7,  7,  6,  0,  0,  0,
     0,  0,  0,  0,  7,  7,  7,  8,  0,  8,  7,  7,  7,  0,  0,  0,
     0,  0,  0,  0,  7,  7,  8,  8,  0,  8,  8,  7,  7,  0,  0,  0,
     7,  7,  7,  8,  7,  8,  8,  8,  0,  8,  8,  8,  7,  8,  7,  7,
     7,  7,  7,  7,  8,  8,  8,  9,  0,  8,  8,  8,  8,  7,  7,  7,
     7,  7,  8,  8,  8,  8,  9,  9,  0,  9,  8,  8,  8,  8,  8,  7,
     8,  8,  8,  8,  8,  9,  9,  9,  0,  9,  9,  9,  8,  8,  8,  8,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     8,  8,  8,  8,  8,  9,  9,  9,  0,  9,  9,  9,  8,  8,  8,  8,
     7,  7,  8,  8,  8,  8,  8,  9,  0,  9,  9,  8,  8,  8,  8,  7,
     7,  7,  7,  7,  8,  8,  8,  8,  0,  9,  8,  8,  8,  7,  7,  7,
     7,  7,  7,  8,  7,  8,  8,  8,  0,  8,  8,  8,  7,  8,  7,  7,
     0,  0,  0,  0,  7,  7,  8,  8,  0,  8,  8,  7,  7,  0,  0,  0,
     0,  0,  0,  0,  7,  7,  7,  8,  0,  8,  7,  7,  7,  0,  0,  0,
     0,  0,  0,  0,  6,  7,  7,  7,  0,  7,  7,  7,  7,  0,  0,  0,
];

#[rustfmt::skip]
const SPECTRUM_A_4_1_CODES: [u16; 256] = [
      3,  24,  88,   0, 102,  60, 214, 124,   0, 125, 215,  61, 103,   1,  89,  25,
      2, 100,  54, 218,  76,  28, 190,  44,   0,  55, 197,  41,  75, 231,  59, 105,
     68,  46, 250, 146,  32, 248, 134, 508,   0, 487, 127, 245,  35, 173, 253,  45,
    246, 220, 156,  62, 240, 182,  38, 390,   0, 397,  47, 181, 225,  61, 175, 217,
     84,  64,  20, 236, 188,  84, 454, 264,   0, 267, 453, 105, 185, 223,  25,  71,
     38,   8, 228, 162,  86, 476, 322, 106,   0, 145, 291, 479,  75, 167, 235,  11,
    192, 158, 106,  34, 426, 320, 146, 970,   0, 935,  75, 289, 399,   7, 113, 165,
     32,   4, 424, 372, 228, 104, 932, 750,   0, 749, 969,  73, 231, 389, 465, 511,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     33, 510, 464, 388, 230,  72, 968, 748,   0, 751, 933, 105, 229, 373, 425,   5,
    193, 164, 112,   6, 398, 288,  74, 934,   0, 971, 147, 321, 427,  35, 107, 159,
     39,  10, 234, 166,  74, 478, 290, 144,   0, 107, 323, 477,  87, 163, 229,   9,
     85,  70,  24, 222, 184, 104, 452, 266,   0, 265, 455,  85, 189, 237,  21,  65,
    247, 216, 174,  60, 224, 180,  46, 396,   0, 391,  39, 183, 241,  63, 157, 221,
     69,  44, 252, 172,  34, 244, 126, 486,   0, 509, 135, 249,  33, 147, 251,  47,
      3, 104,  58, 230,  74,  40, 196,  54,   0,  45, 191,  29,  77, 219,  55, 101,
];

#[rustfmt::skip]
const SPECTRUM_A_4_1_BITS: [u8; 256] = [
     5,  6,  7,  7,  7,  7,  8,  8,  0,  8,  8,  7,  7,  7,  7,  6,
     6,  7,  7,  8,  7,  7,  8,  8,  0,  8,  8,  7,  7,  8,  7,  7,
     7,  7,  8,  8,  7,  8,  8,  9,  0,  9,  8,  8,  7,  8,  8,  7,
     8,  8,  8,  8,  8,  8,  8,  9,  0,  9,  8,  8,  8,  8,  8,  8,
     7,  7,  7,  8,  8,  8,  9,  9,  0,  9,  9,  8,  8,  8,  7,  7,
     7,  7,  8,  8,  8,  9,  9,  9,  0,  9,  9,  9,  8,  8,  8,  7,
     8,  8,  8,  8,  9,  9,  9, 10,  0, 10,  9,  9,  9,  8,  8,  8,
     8,  8,  9,  9,  9,  9, 10, 10,  0, 10, 10,  9,  9,  9,  9,  9,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     8,  9,  9,  9,  9,  9, 10, 10,  0, 10, 10,  9,  9,  9,  9,  8,
     8,  8,  8,  8,  9,  9,  9, 10,  0, 10,  9,  9,  9,  8,  8,  8,
     7,  7,  8,  8,  8,  9,  9,  9,  0,  9,  9,  9,  8,  8,  8,  7,
     7,  7,  7,  8,  8,  8,  9,  9,  0,  9,  9,  8,  8,  8,  7,  7,
     8,  8,  8,  8,  8,  8,  8,  9,  0,  9,  8,  8,  8,  8,  8,  8,
     7,  7,  8,  8,  7,  8,  8,  9,  0,  9,  8,  8,  7,  8,  8,  7,
     6,  7,  7,  8,  7,  7,  8,  8,  0,  8,  8,  7,  7,  8,  7,  7,
];

#[rustfmt::skip]
const SPECTRUM_A_4_2_CODES: [u16; 256] = [
      2,  62,  22,  96,  78, 220,  74, 304,   0, 305,  75, 221,  79,  97,  23,  63,
      2,  44, 118,  66,  52, 206,   2, 232,   0, 207,   1, 209,  55,  69, 123,  47,
     20, 114,  82,  26, 224, 128, 408,  30,   0,  29, 411, 131, 223,  25,  85, 121,
     80,  60,   4, 196, 150,  12, 234, 842,   0, 847, 237, 471, 149, 175,   3,  63,
     70,  38, 214, 146,  70, 346, 936, 264,   0, 271, 931, 309,  57, 145, 217,  49,
    212, 202, 114, 454, 310, 144, 690, 260,   0, 259, 273, 139, 307, 467, 113, 201,
     62, 436, 396, 204, 906, 688, 262, 242,   0, 239, 257, 275, 929, 203, 399, 439,
    238, 146, 904, 840, 266, 244, 240, 234,   0, 233, 237, 247, 269, 845, 939, 201,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    239, 200, 938, 844, 268, 246, 236, 232,   0, 235, 241, 245, 267, 841, 905, 147,
     63, 438, 398, 202, 928, 274, 256, 238,   0, 243, 263, 689, 907, 205, 397, 437,
    213, 200, 112, 466, 306, 138, 272, 258,   0, 261, 691, 145, 311, 455, 115, 203,
     71,  48, 216, 144,  56, 308, 930, 270,   0, 265, 937, 347,  71, 147, 215,  39,
     81,  62,   2, 174, 148, 470, 236, 846,   0, 843, 235,  13, 151, 197,   5,  61,
     21, 120,  84,  24, 222, 130, 410,  28,   0,  31, 409, 129, 225,  27,  83, 115,
      3,  46, 122,  68,  54, 208,   0, 206,   0, 233,   3, 207,  53,  67, 119,  45,
];

#[rustfmt::skip]
const SPECTRUM_A_4_2_BITS: [u8; 256] = [
     4,  6,  6,  7,  7,  8,  8,  9,  0,  9,  8,  8,  7,  7,  6,  6,
     5,  6,  7,  7,  7,  8,  8,  9,  0,  9,  8,  8,  7,  7,  7,  6,
     6,  7,  7,  7,  8,  8,  9,  9,  0,  9,  9,  8,  8,  7,  7,  7,
     7,  7,  7,  8,  8,  8,  9, 10,  0, 10,  9,  9,  8,  8,  7,  7,
     7,  7,  8,  8,  8,  9, 10, 10,  0, 10, 10,  9,  8,  8,  8,  7,
     8,  8,  8,  9,  9,  9, 10, 10,  0, 10, 10,  9,  9,  9,  8,  8,
     8,  9,  9,  9, 10, 10, 10, 10,  0, 10, 10, 10, 10,  9,  9,  9,
     9,  9, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10,  9,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     9,  9, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10,  9,
     8,  9,  9,  9, 10, 10, 10, 10,  0, 10, 10, 10, 10,  9,  9,  9,
     8,  8,  8,  9,  9,  9, 10, 10,  0, 10, 10,  9,  9,  9,  8,  8,
     7,  7,  8,  8,  8,  9, 10, 10,  0, 10, 10,  9,  8,  8,  8,  7,
     7,  7,  7,  8,  8,  9,  9, 10,  0, 10,  9,  8,  8,  8,  7,  7,
     6,  7,  7,  7,  8,  8,  9,  9,  0,  9,  9,  8,  8,  7,  7,  7,
     5,  6,  7,  7,  7,  8,  8,  9,  0,  9,  8,  8,  7,  7,  7,  6,
];

#[rustfmt::skip]
const SPECTRUM_A_4_3_CODES: [u16; 256] = [
     10,  18,  48, 110,  36, 116, 236, 126,   0, 127, 237, 117,  37, 111,  49,  19,
     16,  60,  24,  90,   2,  70, 158, 124,   0, 121, 229,  77,   7, 101,  27,  63,
     46,  22, 114,  26, 214, 454, 948, 102,   0, 107, 951, 473, 213,  33, 117,  21,
    108,  62,  30, 204,  68, 242, 130,  92,   0,  95, 135, 245,  49, 207,  23,  89,
     28, 238, 208,  36, 448, 142, 110,  72,   0,  77, 109, 137, 247,  51, 211,   1,
    112,  40, 450, 240, 138, 116,  84,  64,   0,  67,  83, 115, 153, 239, 453,  43,
    230,  78, 140, 128, 104,  88,  70,  42,   0,  41,  69,  81, 101, 133, 155, 157,
    122, 118,  96,  86,  78,  44,  36,  34,   0,  33,  39,  47,  75,  91,  99, 113,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    123, 112,  98,  90,  74,  46,  38,  32,   0,  35,  37,  45,  79,  87,  97, 119,
    231, 156, 154, 132, 100,  80,  68,  40,   0,  43,  71,  89, 105, 129, 141,  79,
    113,  42, 452, 238, 152, 114,  82,  66,   0,  65,  85, 117, 139, 241, 451,  41,
     29,   0, 210,  50, 246, 136, 108,  76,   0,  73, 111, 143, 449,  37, 209, 239,
    109,  88,  22, 206,  48, 244, 134,  94,   0,  93, 131, 243,  69, 205,  31,  63,
     47,  20, 116,  32, 212, 472, 950, 106,   0, 103, 949, 455, 215,  27, 115,  23,
     17,  62,  26, 100,   6,  76, 228, 120,   0, 125, 159,  71,   3,  91,  25,  61,
];

#[rustfmt::skip]
const SPECTRUM_A_4_3_BITS: [u8; 256] = [
     4,  5,  6,  7,  7,  8,  9, 10,  0, 10,  9,  8,  7,  7,  6,  5,
     5,  6,  6,  7,  7,  8,  9, 10,  0, 10,  9,  8,  7,  7,  6,  6,
     6,  6,  7,  7,  8,  9, 10, 10,  0, 10, 10,  9,  8,  7,  7,  6,
     7,  7,  7,  8,  8,  9, 10, 10,  0, 10, 10,  9,  8,  8,  7,  7,
     7,  8,  8,  8,  9, 10, 10, 10,  0, 10, 10, 10,  9,  8,  8,  7,
     8,  8,  9,  9, 10, 10, 10, 10,  0, 10, 10, 10, 10,  9,  9,  8,
     9,  9, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10,  9,
    10, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
    10, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
     9,  9, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10,  9,
     8,  8,  9,  9, 10, 10, 10, 10,  0, 10, 10, 10, 10,  9,  9,  8,
     7,  7,  8,  8,  9, 10, 10, 10,  0, 10, 10, 10,  9,  8,  8,  8,
     7,  7,  7,  8,  8,  9, 10, 10,  0, 10, 10,  9,  8,  8,  7,  7,
     6,  6,  7,  7,  8,  9, 10, 10,  0, 10, 10,  9,  8,  7,  7,  6,
     5,  6,  6,  7,  7,  8,  9, 10,  0, 10,  9,  8,  7,  7,  6,  6,
];

#[rustfmt::skip]
const SPECTRUM_A_5_0_CODES: [u16; 32] = [
    25, 22, 18, 14,  6, 58, 56, 48,  0,  4, 30, 26, 20, 16, 12,  4,
     0,  5, 13, 17, 21, 27, 31,  5,  1, 49, 57, 59,  7, 15, 19, 23,
];

#[rustfmt::skip]
const SPECTRUM_A_5_0_BITS: [u8; 32] = [
     5,  5,  5,  5,  5,  6,  6,  6,  4,  4,  5,  5,  5,  5,  5,  5,
     0,  5,  5,  5,  5,  5,  5,  4,  4,  6,  6,  6,  5,  5,  5,  5,
];

#[rustfmt::skip]
const SPECTRUM_A_5_1_CODES: [u16; 32] = [
     9,  4,  0, 30, 26, 20, 12,  6, 24, 22, 14,  4, 58, 56, 34, 32,
     0, 33, 35, 57, 59,  5, 15, 23, 25,  7, 13, 21, 27, 31,  1,  5,
];

#[rustfmt::skip]
const SPECTRUM_A_5_1_BITS: [u8; 32] = [
     4,  4,  4,  5,  5,  5,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,
     0,  6,  6,  6,  6,  5,  5,  5,  5,  5,  5,  5,  5,  5,  4,  4,
];

#[rustfmt::skip]
const SPECTRUM_A_5_2_CODES: [u16; 32] = [
      0,  12,   8,   4,  30,  22,  20,   6,  12,   4,  56,  30, 118, 116,  58,  56,
      0,  57,  59, 117, 119,  31,  57,   5,  13,   7,  21,  23,  31,   5,   9,  13,
];

#[rustfmt::skip]
const SPECTRUM_A_5_2_BITS: [u8; 32] = [
     3,  4,  4,  4,  5,  5,  5,  5,  5,  5,  6,  6,  7,  7,  7,  7,
     0,  7,  7,  7,  7,  6,  6,  5,  5,  5,  5,  5,  5,  4,  4,  4,
];

#[rustfmt::skip]
const SPECTRUM_A_5_3_CODES: [u16; 32] = [
      2,  14,  10,   8,   2,  26,  14,   2,   0,  48,  24, 102,  54,  52, 202, 200,
      0, 201, 203,  53,  55, 103,  25,  49,   1,   3,  15,  27,   3,   9,  11,  15,
];

#[rustfmt::skip]
const SPECTRUM_A_5_3_BITS: [u8; 32] = [
     3,  4,  4,  4,  4,  5,  5,  5,  5,  6,  6,  7,  7,  7,  8,  8,
     0,  8,  8,  7,  7,  7,  6,  6,  5,  5,  5,  5,  4,  4,  4,  4,
];

#[rustfmt::skip]
const SPECTRUM_A_6_0_CODES: [u16; 64] = [
     53,  48,  42,  40,  36,  32,  24,  14,  12, 126, 124, 114, 112, 104,  94,  92,
      4,  14,   8,   0,  60,  58,  54,  50,  44,  38,  34,  26,  22,  20,   6,   4,
      0,   5,   7,  21,  23,  27,  35,  39,  45,  51,  55,  59,  61,   1,   9,  15,
      5,  93,  95, 105, 113, 115, 125, 127,  13,  15,  25,  33,  37,  41,  43,  49,
];

#[rustfmt::skip]
const SPECTRUM_A_6_0_BITS: [u8; 64] = [
     6,  6,  6,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7,  7,
     5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,
     0,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  5,  5,  5,
     5,  7,  7,  7,  7,  7,  7,  7,  6,  6,  6,  6,  6,  6,  6,  6,
];

#[rustfmt::skip]
const SPECTRUM_A_6_1_CODES: [u16; 64] = [
     20,  14,   8,   4,   2,  62,  60,  56,  52,  48,  42,  36,  26,  24,  14,   2,
     50,  54,  44,  38,  32,  22,  12,   0, 118, 116,  94,  92,  70,  68,  42,  40,
      0,  41,  43,  69,  71,  93,  95, 117, 119,   1,  13,  23,  33,  39,  45,  55,
     51,   3,  15,  25,  27,  37,  43,  49,  53,  57,  61,  63,   3,   5,   9,  15,
];

#[rustfmt::skip]
const SPECTRUM_A_6_1_BITS: [u8; 64] = [
     5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,
     6,  6,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7,  7,  7,
     0,  7,  7,  7,  7,  7,  7,  7,  7,  6,  6,  6,  6,  6,  6,  6,
     6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  5,  5,  5,  5,
];

#[rustfmt::skip]
const SPECTRUM_A_6_2_CODES: [u16; 64] = [
      0,  28,  24,  20,  16,  10,   8,   2,  62,  54,  46,  44,  36,  28,  14,   8,
     30,  26,  12, 122, 106, 104,  76,  50,  22,  20, 242, 240, 158, 156,  98,  96,
      0,  97,  99, 157, 159, 241, 243,  21,  23,  51,  77, 105, 107, 123,  13,  27,
     31,   9,  15,  29,  37,  45,  47,  55,  63,   3,   9,  11,  17,  21,  25,  29,
];

#[rustfmt::skip]
const SPECTRUM_A_6_2_BITS: [u8; 64] = [
     4,  5,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  6,  6,
     6,  6,  6,  7,  7,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8,
     0,  8,  8,  8,  8,  8,  8,  7,  7,  7,  7,  7,  7,  7,  6,  6,
     6,  6,  6,  6,  6,  6,  6,  6,  6,  5,  5,  5,  5,  5,  5,  5,
];

#[rustfmt::skip]
const SPECTRUM_A_6_3_CODES: [u16; 64] = [
      6,   2,  28,  26,  22,  18,  14,  10,   2,  62,  50,  42,  34,  32,  16, 122,
      0, 120,  96,  80,  36,   6, 198, 196, 164,  78,  10,   8, 334, 332, 154, 152,
      0, 153, 155, 333, 335,   9,  11,  79, 165, 197, 199,   7,  37,  81,  97, 121,
      1, 123,  17,  33,  35,  43,  51,  63,   3,  11,  15,  19,  23,  27,  29,   3,
];

#[rustfmt::skip]
const SPECTRUM_A_6_3_BITS: [u8; 64] = [
     4,  4,  5,  5,  5,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  7,
     6,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8,  9,  9,  9,  9,
     0,  9,  9,  9,  9,  8,  8,  8,  8,  8,  8,  7,  7,  7,  7,  7,
     6,  7,  6,  6,  6,  6,  6,  6,  5,  5,  5,  5,  5,  5,  5,  4,
];

#[rustfmt::skip]
const SPECTRUM_A_7_0_CODES: [u16; 128] = [
    108, 102,  98,  92,  86,  80,  82,  78,  72,  62,  54,  52,  42,  38,  30,  22,
     14,   8,   0, 246, 244, 238, 236, 226, 224, 218, 210, 208, 190, 188, 178, 176,
     12,  32,  28,  22,  16,   8,   2, 126, 124, 120, 116, 114, 110, 106, 100,  96,
     90,  84,  76,  74,  70,  68,  60,  50,  48,  40,  36,  28,  20,  12,  10,   2,
      0,   3,  11,  13,  21,  29,  37,  41,  49,  51,  61,  69,  71,  75,  77,  85,
     91,  97, 101, 107, 111, 115, 117, 121, 125, 127,   3,   9,  17,  23,  29,  33,
     13, 177, 179, 189, 191, 209, 211, 219, 225, 227, 237, 239, 245, 247,   1,   9,
     15,  23,  31,  39,  43,  53,  55,  63,  73,  79,  83,  81,  87,  93,  99, 103,
];

#[rustfmt::skip]
const SPECTRUM_A_7_0_BITS: [u8; 128] = [
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     7,  7,  7,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,
     6,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     0,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  6,  6,  6,  6,  6,  6,
     6,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  7,  7,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
];

#[rustfmt::skip]
const SPECTRUM_A_7_1_CODES: [u16; 128] = [
     42,  36,  28,  24,  18,  14,  10,   6,   2, 126, 124, 122, 118, 114, 112, 106,
    104,  98,  92,  90,  82,  78,  70,  66,  60,  52,  42,  40,  32,  18,  16,   8,
    102, 116, 108, 100,  94,  88,  80,  68,  64,  54,  44,  34,  26,  10,   2,   0,
    242, 240, 222, 220, 194, 192, 174, 172, 154, 152, 126, 124,  94,  92,  50,  48,
      0,  49,  51,  93,  95, 125, 127, 153, 155, 173, 175, 193, 195, 221, 223, 241,
    243,   1,   3,  11,  27,  35,  45,  55,  65,  69,  81,  89,  95, 101, 109, 117,
    103,   9,  17,  19,  33,  41,  43,  53,  61,  67,  71,  79,  83,  91,  93,  99,
    105, 107, 113, 115, 119, 123, 125, 127,   3,   7,  11,  15,  19,  25,  29,  37,
];

#[rustfmt::skip]
const SPECTRUM_A_7_1_BITS: [u8; 128] = [
     6,  6,  6,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,
     0,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,
     8,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  7,  7,  6,  6,  6,  6,  6,  6,  6,  6,
];

#[rustfmt::skip]
const SPECTRUM_A_7_2_CODES: [u16; 128] = [
      3,  62,  56,  52,  48,  44,  40,  36,  32,  28,  22,  20,  14,  10,   4,   0,
    122, 118, 110, 108, 100,  94,  86,  78,  76,  68,  54,  48,  34,  24,  18,   4,
     60,  62,  50,  36,  32,  16, 242, 240, 232, 206, 186, 184, 168, 140, 106,  78,
     76,  52,  14,  12, 470, 468, 410, 408, 342, 340, 286, 284, 210, 208, 110, 108,
      0, 109, 111, 209, 211, 285, 287, 341, 343, 409, 411, 469, 471,  13,  15,  53,
     77,  79, 107, 141, 169, 185, 187, 207, 233, 241, 243,  17,  33,  37,  51,  63,
     61,   5,  19,  25,  35,  49,  55,  69,  77,  79,  87,  95, 101, 109, 111, 119,
    123,   1,   5,  11,  15,  21,  23,  29,  33,  37,  41,  45,  49,  53,  57,  63,
];

#[rustfmt::skip]
const SPECTRUM_A_7_2_BITS: [u8; 128] = [
     5,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,
     8,  8,  8,  8,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,
     0,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  8,  8,  8,
     8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     7,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,
];

#[rustfmt::skip]
const SPECTRUM_A_7_3_CODES: [u16; 128] = [
     13,  10,   4,   0,  58,  54,  50,  48,  44,  40,  38,  34,  30,  24,  18,  14,
      6, 126, 122, 112, 106,  94,  86,  84,  72,  64,  56,  34,  26,  10, 248, 230,
      8, 250, 240, 210, 186, 184, 148, 132, 116,  66,  50, 486, 458, 456, 418, 302,
    270, 268, 236, 130,  98,  96, 970, 968, 834, 832, 602, 600, 478, 476, 258, 256,
      0, 257, 259, 477, 479, 601, 603, 833, 835, 969, 971,  97,  99, 131, 237, 269,
    271, 303, 419, 457, 459, 487,  51,  67, 117, 133, 149, 185, 187, 211, 241, 251,
      9, 231, 249,  11,  27,  35,  57,  65,  73,  85,  87,  95, 107, 113, 123, 127,
      7,  15,  19,  25,  31,  35,  39,  41,  45,  49,  51,  55,  59,   1,   5,  11,
];

#[rustfmt::skip]
const SPECTRUM_A_7_3_BITS: [u8; 128] = [
     5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,
     6,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  8,  8,
     7,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  9,  9,  9,  9,  9,
     9,  9,  9,  9,  9,  9, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
     0, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,  9,  9,  9,  9,  9,
     9,  9,  9,  9,  9,  9,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,
     7,  8,  8,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  5,  5,  5,
];

#[rustfmt::skip]
const SPECTRUM_B_2_1_CODES: [u16; 256] = [
      0,  14,   0,  15,   8,   6,   0,  11,   0,   0,   0,   0,   9,  10,   0,   7,
      6,  10,   0,  41,   6, 344,   0,  35,   0,   0,   0,   0,  19, 372,   0,  33,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      7,  40,   0,  11,  18,  32,   0, 373,   0,   0,   0,   0,   7,  34,   0, 345,
     12, 188,   0, 191,  34, 696,   0, 699,   0,   0,   0,   0,  11, 368,   0, 347,
      0,  78,   0, 351,  66,  74,   0,  65,   0,   0,   0,   0,  85,  68,   0,  77,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     45, 370,   0, 749,  64,  66,   0,  71,   0,   0,   0,   0,  19, 750,   0,  73,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     13, 190,   0, 189,  10, 346,   0, 369,   0,   0,   0,   0,  35, 698,   0, 697,
     44, 748,   0, 371,  18,  72,   0, 751,   0,   0,   0,   0,  65,  70,   0,  67,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      1, 350,   0,  79,  84,  76,   0,  69,   0,   0,   0,   0,  67,  64,   0,  75,
];

#[rustfmt::skip]
const SPECTRUM_B_2_1_BITS: [u8; 256] = [
     0,  4,  0,  4,  4,  5,  0,  5,  0,  0,  0,  0,  4,  5,  0,  5,
     4,  7,  0,  6,  6,  9,  0,  7,  0,  0,  0,  0,  6,  9,  0,  7,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     4,  6,  0,  7,  6,  7,  0,  9,  0,  0,  0,  0,  6,  7,  0,  9,
     4,  8,  0,  8,  8, 10,  0, 10,  0,  0,  0,  0,  6,  9,  0,  9,
     5, 10,  0,  9,  9, 10,  0, 10,  0,  0,  0,  0,  7, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     6,  9,  0, 10,  9, 10,  0, 10,  0,  0,  0,  0,  7, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     4,  8,  0,  8,  6,  9,  0,  9,  0,  0,  0,  0,  8, 10,  0, 10,
     6, 10,  0,  9,  7, 10,  0, 10,  0,  0,  0,  0,  9, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     5,  9,  0, 10,  7, 10,  0, 10,  0,  0,  0,  0,  9, 10,  0, 10,
];

#[rustfmt::skip]
const SPECTRUM_B_2_2_CODES: [u16; 256] = [
      3,   8,   0,   9,   2,  24,   0,  27,   0,   0,   0,   0,   3,  26,   0,  25,
      0, 380,   0,  85,  86, 232,   0, 125,   0,   0,   0,   0,  89, 246,   0, 127,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      1,  84,   0, 381,  88, 126,   0, 247,   0,   0,   0,   0,  87, 124,   0, 233,
      4, 162,   0, 161, 378, 474,   0, 473,   0,   0,   0,   0,  83, 488,   0, 755,
     92, 470,   0, 487, 490, 482,   0, 463,   0,   0,   0,   0, 383, 458,   0, 477,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     91, 752,   0, 479, 484, 460,   0, 469,   0,   0,   0,   0, 113, 480,   0, 457,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      5, 160,   0, 163,  82, 754,   0, 489,   0,   0,   0,   0, 379, 472,   0, 475,
     90, 478,   0, 753, 112, 456,   0, 481,   0,   0,   0,   0, 485, 468,   0, 461,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     93, 486,   0, 471, 382, 476,   0, 459,   0,   0,   0,   0, 491, 462,   0, 483,
];

#[rustfmt::skip]
const SPECTRUM_B_2_2_BITS: [u8; 256] = [
     2,  4,  0,  4,  4,  6,  0,  6,  0,  0,  0,  0,  4,  6,  0,  6,
     4,  9,  0,  7,  7,  9,  0,  8,  0,  0,  0,  0,  7,  9,  0,  8,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     4,  7,  0,  9,  7,  8,  0,  9,  0,  0,  0,  0,  7,  8,  0,  9,
     4,  8,  0,  8,  9, 10,  0, 10,  0,  0,  0,  0,  7, 10,  0, 10,
     7, 10,  0, 10, 10, 10,  0, 10,  0,  0,  0,  0,  9, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     7, 10,  0, 10, 10, 10,  0, 10,  0,  0,  0,  0,  8, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     4,  8,  0,  8,  7, 10,  0, 10,  0,  0,  0,  0,  9, 10,  0, 10,
     7, 10,  0, 10,  8, 10,  0, 10,  0,  0,  0,  0, 10, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     7, 10,  0, 10,  9, 10,  0, 10,  0,  0,  0,  0, 10, 10,  0, 10,
];

#[rustfmt::skip]
const SPECTRUM_B_2_3_CODES: [u16; 256] = [
      1,   0,   0,   1,  10,  28,   0,  51,   0,   0,   0,   0,  11,  50,   0,  29,
      8, 216,   0,  49, 110, 250,   0, 215,   0,   0,   0,   0,  17, 244,   0, 213,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      9,  48,   0, 217,  16, 212,   0, 245,   0,   0,   0,   0, 111, 214,   0, 251,
     14, 218,   0,  37, 210, 212,   0, 219,   0,   0,   0,   0,  23, 254,   0, 253,
     20, 220,   0, 249, 242, 214,   0, 155,   0,   0,   0,   0, 419, 156,   0, 211,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     25, 246,   0, 217, 240, 158,   0, 209,   0,   0,   0,   0, 417, 222,   0, 153,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     15,  36,   0, 219,  22, 252,   0, 255,   0,   0,   0,   0, 211, 218,   0, 213,
     24, 216,   0, 247, 416, 152,   0, 223,   0,   0,   0,   0, 241, 208,   0, 159,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
     21, 248,   0, 221, 418, 210,   0, 157,   0,   0,   0,   0, 243, 154,   0, 215,
];

#[rustfmt::skip]
const SPECTRUM_B_2_3_BITS: [u8; 256] = [
     1,  4,  0,  4,  5,  7,  0,  7,  0,  0,  0,  0,  5,  7,  0,  7,
     5,  9,  0,  7,  8, 10,  0,  9,  0,  0,  0,  0,  7, 10,  0,  9,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     5,  7,  0,  9,  7,  9,  0, 10,  0,  0,  0,  0,  8,  9,  0, 10,
     5,  9,  0,  8,  9, 10,  0, 10,  0,  0,  0,  0,  7, 10,  0, 10,
     7, 10,  0, 10, 10, 10,  0, 10,  0,  0,  0,  0, 10, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     7, 10,  0, 10, 10, 10,  0, 10,  0,  0,  0,  0, 10, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     5,  8,  0,  9,  7, 10,  0, 10,  0,  0,  0,  0,  9, 10,  0, 10,
     7, 10,  0, 10, 10, 10,  0, 10,  0,  0,  0,  0, 10, 10,  0, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     7, 10,  0, 10, 10, 10,  0, 10,  0,  0,  0,  0, 10, 10,  0, 10,
];

#[rustfmt::skip]
const SPECTRUM_B_3_1_CODES: [u16; 64] = [
      1,   2,  30,  42,   0,  43,  31,   3,  22,  32,  58, 100,   0,   5,   1,  35,
     26,  38, 112,  12,   0, 207, 115,  49,  36,  14, 204, 326,   0, 325, 161,  83,
      0,   0,   0,   0,   0,   0,   0,   0,  37,  82, 160, 324,   0, 327, 205,  15,
     27,  48, 114, 206,   0,  13, 113,  39,  23,  34,   0,   4,   0, 101,  59,  33,
];

#[rustfmt::skip]
const SPECTRUM_B_3_1_BITS: [u8; 64] = [
     2,  4,  5,  6,  0,  6,  5,  4,  5,  6,  6,  7,  0,  6,  5,  6,
     5,  6,  7,  7,  0,  8,  7,  6,  6,  7,  8,  9,  0,  9,  8,  7,
     0,  0,  0,  0,  0,  0,  0,  0,  6,  7,  8,  9,  0,  9,  8,  7,
     5,  6,  7,  8,  0,  7,  7,  6,  5,  6,  5,  6,  0,  7,  6,  6,
];

#[rustfmt::skip]
const SPECTRUM_B_3_2_CODES: [u16; 64] = [
      3,   8,  20,  94,   0,  95,  21,   9,   4,   2,  28, 186,   0,  17,  31,   1,
     12,  12,  20, 358,   0,  45,  19,  15,  90, 176,  94, 184,   0, 187, 357, 185,
      0,   0,   0,   0,   0,   0,   0,   0,  91, 184, 356, 186,   0, 185,  95, 177,
     13,  14,  18,  44,   0, 359,  21,  13,   5,   0,  30,  16,   0, 187,  29,   3,
];

#[rustfmt::skip]
const SPECTRUM_B_3_2_BITS: [u8; 64] = [
     2,  4,  5,  7,  0,  7,  5,  4,  4,  5,  6,  8,  0,  7,  6,  5,
     5,  6,  7,  9,  0,  8,  7,  6,  7,  8,  9, 10,  0, 10,  9,  8,
     0,  0,  0,  0,  0,  0,  0,  0,  7,  8,  9, 10,  0, 10,  9,  8,
     5,  6,  7,  8,  0,  9,  7,  6,  4,  5,  6,  7,  0,  8,  6,  5,
];

#[rustfmt::skip]
const SPECTRUM_B_3_3_CODES: [u16; 64] = [
      0,  10,  56, 238,   0, 239,  57,  11,   8,  60, 110, 472,   0, 193, 117,  63,
     50, 104, 196, 856,   0, 783, 199, 109, 212, 430, 780, 776,   0, 779, 859, 475,
      0,   0,   0,   0,   0,   0,   0,   0, 213, 474, 858, 778,   0, 777, 781, 431,
     51, 108, 198, 782,   0, 857, 197, 105,   9,  62, 116, 192,   0, 473, 111,  61,
];

#[rustfmt::skip]
const SPECTRUM_B_3_3_BITS: [u8; 64] = [
     1,  4,  6,  8,  0,  8,  6,  4,  4,  6,  7,  9,  0,  8,  7,  6,
     6,  7,  8, 10,  0, 10,  8,  7,  8,  9, 10, 10,  0, 10, 10,  9,
     0,  0,  0,  0,  0,  0,  0,  0,  8,  9, 10, 10,  0, 10, 10,  9,
     6,  7,  8, 10,  0, 10,  8,  7,  4,  6,  7,  8,  0,  9,  7,  6,
];

#[rustfmt::skip]
const SPECTRUM_B_4_1_CODES: [u16; 256] = [
      14,   24,   16,  240,   36,   90,  246,  120,    0,  121,  247,   91,   37,  241,   17,   25,
      12,   20,   28,   54,   92,   18,  158,  484,    0,   11,  169,   59,   95,  113,   25,   23,
     110,    0,   62,  276,    2,  176,  426,  122,    0,  153,  487,  179,   11,  305,  127,   13,
     216,  510,  274,  558,  134,   16,  308,  860,    0,  863,  307,   19,  129,  557,  281,  123,
      10,   80,  248,   78,  436,  340, 1004,  210,    0,  215,  983,  311,  509,  115,  253,   87,
      82,   16,  142,  488,  282, 1006,  242,   60,    0,   63,  241,  981,  273,  501,  157,   37,
     210,  130,  416,  248,  878,  212,  114,   58,    0,   39,  113,  125,  877,  251,  429,  133,
      12,  424,   60,  838,  208,  118,   36,   32,    0,   35,   57,  117,  127,  837,  155,  343,
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,
      13,  342,  154,  836,  126,  116,   56,   34,    0,   33,   37,  119,  209,  839,   61,  425,
     211,  132,  428,  250,  876,  124,  112,   38,    0,   59,  115,  213,  879,  249,  417,  131,
      83,   36,  156,  500,  272,  980,  240,   62,    0,   61,  243, 1007,  283,  489,  143,   17,
      11,   86,  252,  114,  508,  310,  982,  214,    0,  211, 1005,  341,  437,   79,  249,   81,
     217,  122,  280,  556,  128,   18,  306,  862,    0,  861,  309,   17,  135,  559,  275,  511,
     111,   12,  126,  304,   10,  178,  486,  152,    0,  123,  427,  177,    3,  277,   63,    1,
      13,   22,   24,  112,   94,   58,  168,   10,    0,  485,  159,   19,   93,   55,   29,   21,
];

#[rustfmt::skip]
const SPECTRUM_B_4_1_BITS: [u8; 256] = [
     4,  5,  6,  8,  6,  7,  8,  8,  0,  8,  8,  7,  6,  8,  6,  5,
     5,  6,  7,  8,  7,  7,  8,  9,  0,  8,  8,  7,  7,  8,  7,  6,
     7,  7,  8,  9,  7,  8,  9,  9,  0,  9,  9,  8,  7,  9,  8,  7,
     8,  9,  9, 10,  8,  8,  9, 10,  0, 10,  9,  8,  8, 10,  9,  8,
     6,  7,  8,  8,  9,  9, 10, 10,  0, 10, 10,  9,  9,  8,  8,  7,
     7,  7,  8,  9,  9, 10, 10, 10,  0, 10, 10, 10,  9,  9,  8,  7,
     8,  8,  9,  9, 10, 10, 10, 10,  0, 10, 10, 10, 10,  9,  9,  8,
     8,  9,  9, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10,  9,  9,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
     8,  9,  9, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10,  9,  9,
     8,  8,  9,  9, 10, 10, 10, 10,  0, 10, 10, 10, 10,  9,  9,  8,
     7,  7,  8,  9,  9, 10, 10, 10,  0, 10, 10, 10,  9,  9,  8,  7,
     6,  7,  8,  8,  9,  9, 10, 10,  0, 10, 10,  9,  9,  8,  8,  7,
     8,  8,  9, 10,  8,  8,  9, 10,  0, 10,  9,  8,  8, 10,  9,  9,
     7,  7,  8,  9,  7,  8,  9,  9,  0,  9,  9,  8,  7,  9,  8,  7,
     5,  6,  7,  8,  7,  7,  8,  8,  0,  9,  8,  7,  7,  8,  7,  6,
];

#[rustfmt::skip]
const SPECTRUM_B_4_2_CODES: [u16; 256] = [
      1,  30,  34,  24, 100, 236,   8, 256,   0, 257,   9, 237, 101,  25,  35,  31,
     26,  48,  86, 154,  10, 144, 300, 166,   0, 169, 303, 147,  15, 159,  89,  57,
     14,  84, 188, 414, 130, 374, 172, 136,   0, 139, 175, 413, 149, 465, 191,  81,
      2, 152, 468, 184, 368,  70, 144,  96,   0, 103, 149, 189, 371, 181, 467, 157,
     82, 238,  52, 372, 186, 156, 128,  68,   0,  71, 109, 153, 191, 367, 133,   1,
    204,  54, 364, 176, 154, 132,  78,  62,   0,  55,  75, 107, 161, 179, 363, 135,
    470, 258, 164, 146, 104,  76,  52,  48,   0,  45,  61,  73, 131, 151, 171, 361,
    182, 158, 110, 100,  64,  56,  46,  42,   0,  41,  51,  59,  67,  99, 135, 163,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    183, 162, 134,  98,  66,  58,  50,  40,   0,  43,  47,  57,  65, 101, 111, 159,
    471, 360, 170, 150, 130,  72,  60,  44,   0,  49,  53,  77, 105, 147, 165, 259,
    205, 134, 362, 178, 160, 106,  74,  54,   0,  63,  79, 133, 155, 177, 365,  55,
     83,   0, 132, 366, 190, 152, 108,  70,   0,  69, 129, 157, 187, 373,  53, 239,
      3, 156, 466, 180, 370, 188, 148, 102,   0,  97, 145,  71, 369, 185, 469, 153,
     15,  80, 190, 464, 148, 412, 174, 138,   0, 137, 173, 375, 131, 415, 189,  85,
     27,  56,  88, 158,  14, 146, 302, 168,   0, 167, 301, 145,  11, 155,  87,  49,
];

#[rustfmt::skip]
const SPECTRUM_B_4_2_BITS: [u8; 256] = [
     2,  5,  6,  7,  7,  8,  8,  9,  0,  9,  8,  8,  7,  7,  6,  5,
     5,  6,  7,  8,  7,  8,  9, 10,  0, 10,  9,  8,  7,  8,  7,  6,
     6,  7,  8,  9,  8,  9, 10, 10,  0, 10, 10,  9,  8,  9,  8,  7,
     7,  8,  9, 10,  9,  9, 10, 10,  0, 10, 10, 10,  9, 10,  9,  8,
     7,  8,  8,  9, 10, 10, 10, 10,  0, 10, 10, 10, 10,  9,  8,  7,
     8,  8,  9, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10,  9,  8,
     9,  9, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10,  9,
    10, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
    10, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
     9,  9, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10,  9,
     8,  8,  9, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10,  9,  8,
     7,  7,  8,  9, 10, 10, 10, 10,  0, 10, 10, 10, 10,  9,  8,  8,
     7,  8,  9, 10,  9, 10, 10, 10,  0, 10, 10,  9,  9, 10,  9,  8,
     6,  7,  8,  9,  8,  9, 10, 10,  0, 10, 10,  9,  8,  9,  8,  7,
     5,  6,  7,  8,  7,  8,  9, 10,  0, 10,  9,  8,  7,  8,  7,  6,
];

#[rustfmt::skip]
const SPECTRUM_B_4_3_CODES: [u16; 256] = [
      2,   2,  48,   0,   2,  12, 466, 430,   0, 431, 467,  13,   3,   1,  49,   3,
     30,   2, 112, 200, 126, 488, 448, 374,   0, 383, 451, 491, 207, 211, 115,   9,
     24, 106, 236, 478, 418, 458, 426, 356,   0, 365, 429, 465, 495, 477, 235, 109,
    232, 202, 446, 462, 474, 438, 368, 340,   0, 339, 371, 433, 471, 469, 835, 205,
    220, 120, 832, 460, 442, 424, 342, 328,   0, 325, 351, 417, 445, 473, 493, 125,
    444, 476, 452, 434, 380, 346, 330,  58,   0,  57, 327, 363, 379, 437, 457, 479,
    454, 440, 418, 360, 352, 332,  46,  36,   0,  39,  61, 337, 349, 367, 423, 447,
    420, 372, 354, 334, 320,  44,  42,  34,   0,  33,  41,  63, 323, 345, 359, 377,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    421, 376, 358, 344, 322,  62,  40,  32,   0,  35,  43,  45, 321, 335, 355, 373,
    455, 446, 422, 366, 348, 336,  60,  38,   0,  37,  47, 333, 353, 361, 419, 441,
    445, 478, 456, 436, 378, 362, 326,  56,   0,  59, 331, 347, 381, 435, 453, 477,
    221, 124, 492, 472, 444, 416, 350, 324,   0, 329, 343, 425, 443, 461, 833, 121,
    233, 204, 834, 468, 470, 432, 370, 338,   0, 341, 369, 439, 475, 463, 447, 203,
     25, 108, 234, 476, 494, 464, 428, 364,   0, 357, 427, 459, 419, 479, 237, 107,
     31,   8, 114, 210, 206, 490, 450, 382,   0, 375, 449, 489, 127, 201, 113,   3,
];

#[rustfmt::skip]
const SPECTRUM_B_4_3_BITS: [u8; 256] = [
     2,  4,  6,  7,  7,  8, 10, 10,  0, 10, 10,  8,  7,  7,  6,  4,
     5,  5,  7,  8,  8, 10, 10, 10,  0, 10, 10, 10,  8,  8,  7,  5,
     6,  7,  8,  9,  9, 10, 10, 10,  0, 10, 10, 10, 10,  9,  8,  7,
     8,  8,  9, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10,  8,
     8,  8, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10,  8,
     9, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,
    10, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
     9, 10, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10, 10,
     8,  8, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10, 10,  8,
     8,  8, 10, 10, 10, 10, 10, 10,  0, 10, 10, 10, 10, 10,  9,  8,
     6,  7,  8,  9, 10, 10, 10, 10,  0, 10, 10, 10,  9,  9,  8,  7,
     5,  5,  7,  8,  8, 10, 10, 10,  0, 10, 10, 10,  8,  8,  7,  5,
];

#[rustfmt::skip]
const SPECTRUM_B_5_1_CODES: [u16; 32] = [
     6, 14,  6,  0, 10,  4, 44, 18, 20, 16,  6, 46, 36, 16, 78, 76,
     0, 77, 79, 17, 37, 47,  7, 17, 21, 19, 45,  5, 11,  1,  7, 15,
];

#[rustfmt::skip]
const SPECTRUM_B_5_1_BITS: [u8; 32] = [
     3,  4,  4,  4,  5,  5,  6,  6,  5,  5,  5,  6,  6,  6,  7,  7,
     0,  7,  7,  6,  6,  6,  5,  5,  5,  6,  6,  5,  5,  4,  4,  4,
];

#[rustfmt::skip]
const SPECTRUM_B_5_2_CODES: [u16; 32] = [
      2,   0,   6,  28,  24,  62,  22,  16,  60,  54,  20, 106,  38,  36, 210, 208,
      0, 209, 211,  37,  39, 107,  21,  55,  61,  17,  23,  63,  25,  29,   7,   1,
];

#[rustfmt::skip]
const SPECTRUM_B_5_2_BITS: [u8; 32] = [
     2,  3,  4,  5,  5,  6,  6,  6,  6,  6,  6,  7,  7,  7,  8,  8,
     0,  8,  8,  7,  7,  7,  6,  6,  6,  6,  6,  6,  5,  5,  4,  3,
];

#[rustfmt::skip]
const SPECTRUM_B_5_3_CODES: [u16; 32] = [
      3,   2,   8,   0,  20,  46,  14,  90,  10,   8,  26, 178,  50,  48, 354, 352,
      0, 353, 355,  49,  51, 179,  27,   9,  11,  91,  15,  47,  21,   1,   9,   3,
];

#[rustfmt::skip]
const SPECTRUM_B_5_3_BITS: [u8; 32] = [
     2,  3,  4,  4,  5,  6,  6,  7,  6,  6,  7,  8,  8,  8,  9,  9,
     0,  9,  9,  8,  8,  8,  7,  6,  6,  7,  6,  6,  5,  4,  4,  3,
];

#[rustfmt::skip]
const SPECTRUM_B_6_1_CODES: [u16; 64] = [
     13,   6,  28,  20,  10,   4,  62,  46,  34,  14,   6,   0,  90,  78,  64,  32,
     48,  50,  36,  18,  12,   2, 120,  88,  66,  34,  10,   8, 246, 244, 154, 152,
      0, 153, 155, 245, 247,   9,  11,  35,  67,  89, 121,   3,  13,  19,  37,  51,
     49,  33,  65,  79,  91,   1,   7,  15,  35,  47,  63,   5,  11,  21,  29,   7,
];

#[rustfmt::skip]
const SPECTRUM_B_6_1_BITS: [u8; 64] = [
     4,  4,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,
     6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,  7,  8,  8,  8,  8,
     0,  8,  8,  8,  8,  7,  7,  7,  7,  7,  7,  6,  6,  6,  6,  6,
     6,  7,  7,  7,  7,  6,  6,  6,  6,  6,  6,  5,  5,  5,  5,  4,
];

#[rustfmt::skip]
const SPECTRUM_B_6_2_CODES: [u16; 64] = [
      6,  14,   4,  20,  16,   6,   0,  38,  28,  24,   4,  92,  74,  60,  22, 188,
      6,   8,  88,  62,  54,  20, 182, 180, 144, 104, 382, 380, 294, 292, 214, 212,
      0, 213, 215, 293, 295, 381, 383, 105, 145, 181, 183,  21,  55,  63,  89,   9,
      7, 189,  23,  61,  75,  93,   5,  25,  29,  39,   1,   7,  17,  21,   5,  15,
];

#[rustfmt::skip]
const SPECTRUM_B_6_2_BITS: [u8; 64] = [
     3,  4,  4,  5,  5,  5,  5,  6,  6,  6,  6,  7,  7,  7,  7,  8,
     6,  6,  7,  7,  7,  7,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9,
     0,  9,  9,  9,  9,  9,  9,  8,  8,  8,  8,  7,  7,  7,  7,  6,
     6,  8,  7,  7,  7,  7,  6,  6,  6,  6,  5,  5,  5,  5,  4,  4,
];

#[rustfmt::skip]
const SPECTRUM_B_6_3_CODES: [u16; 64] = [
      7,   0,   8,  26,  20,  12,  50,  46,  30,  20,  98,  90,  58,  38,  32, 178,
     56,  44,  34, 192,  94,  74, 390, 388, 352, 186, 146, 144, 710, 708, 370, 368,
      0, 369, 371, 709, 711, 145, 147, 187, 353, 389, 391,  75,  95, 193,  35,  45,
     57, 179,  33,  39,  59,  91,  99,  21,  31,  47,  51,  13,  21,  27,   9,   1,
];

#[rustfmt::skip]
const SPECTRUM_B_6_3_BITS: [u8; 64] = [
     3,  3,  4,  5,  5,  5,  6,  6,  6,  6,  7,  7,  7,  7,  7,  8,
     7,  7,  7,  8,  8,  8,  9,  9,  9,  9,  9,  9, 10, 10, 10, 10,
     0, 10, 10, 10, 10,  9,  9,  9,  9,  9,  9,  8,  8,  8,  7,  7,
     7,  8,  7,  7,  7,  7,  7,  6,  6,  6,  6,  5,  5,  5,  4,  3,
];

#[rustfmt::skip]
const SPECTRUM_B_7_1_CODES: [u16; 128] = [
     30,  22,  12,   0,  56,  50,  40,  34,  28,  18,  14,   6, 118, 108,  96,  78,
     62,  42,  34,  26,  18,  10, 252, 220, 198, 168, 148, 134,  88,  66,  64,  42,
    104, 124, 106,  86,  72,  64,  46,  40,  22,  16,   8, 234, 222, 170, 154, 150,
    122, 120,  90,  50,  48,  40, 510, 508, 466, 464, 394, 392, 306, 304, 266, 264,
      0, 265, 267, 305, 307, 393, 395, 465, 467, 509, 511,  41,  49,  51,  91, 121,
    123, 151, 155, 171, 223, 235,   9,  17,  23,  41,  47,  65,  73,  87, 107, 125,
    105,  43,  65,  67,  89, 135, 149, 169, 199, 221, 253,  11,  19,  27,  35,  43,
     63,  79,  97, 109, 119,   7,  15,  19,  29,  35,  41,  51,  57,   1,  13,  23,
];

#[rustfmt::skip]
const SPECTRUM_B_7_1_BITS: [u8; 128] = [
     5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,
     8,  8,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,
     0,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  8,  8,  8,  8,  8,
     8,  8,  8,  8,  8,  8,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,
     7,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  7,  6,  6,  6,  6,  6,  6,  6,  6,  5,  5,  5,
];

#[rustfmt::skip]
const SPECTRUM_B_7_2_CODES: [u16; 128] = [
      0,   6,  24,  16,   4,  58,  52,  42,  38,  20,  16, 126, 114, 110,  92,  82,
     74,  44,  36,  24, 244, 224, 218, 182, 178, 160,  94,  78,  56,  52, 486, 434,
    250,  30, 248, 240, 190, 180, 162, 144,  76,  58, 494, 484, 454, 432, 376, 354,
    294, 292, 184, 108, 986, 984, 906, 904, 758, 756, 706, 704, 374, 372, 220, 222,
      0, 223, 221, 373, 375, 705, 707, 757, 759, 905, 907, 985, 987, 109, 185, 293,
    295, 355, 377, 433, 455, 485, 495,  59,  77, 145, 163, 181, 191, 241, 249,  31,
    251, 435, 487,  53,  57,  79,  95, 161, 179, 183, 219, 225, 245,  25,  37,  45,
     75,  83,  93, 111, 115, 127,  17,  21,  39,  43,  53,  59,   5,  17,  25,   7,
];

#[rustfmt::skip]
const SPECTRUM_B_7_2_BITS: [u8; 128] = [
     3,  4,  5,  5,  5,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,  7,
     7,  7,  7,  7,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  9,  9,
     8,  7,  8,  8,  8,  8,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9,
     9,  9,  9,  9, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
     0, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,  9,  9,  9,
     9,  9,  9,  9,  9,  9,  9,  8,  8,  8,  8,  8,  8,  8,  8,  7,
     8,  9,  9,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  7,  7,  7,
     7,  7,  7,  7,  7,  7,  6,  6,  6,  6,  6,  6,  5,  5,  5,  4,
];

#[rustfmt::skip]
const SPECTRUM_B_7_3_CODES: [u16; 128] = [
      1,   8,  30,  24,  12,   2,  58,  52,  44,  30,  22,  18, 114, 110,  94,  86,
     80,  56,  34,   4, 226, 218, 186, 168, 118,  84,  80,   2,   0, 448, 432, 342,
    164, 166, 116,  82,   4, 450, 434, 368, 340, 174, 172, 134, 742, 740, 266, 264,
    262, 260, 258, 256,  62,  58,  60,  56,  54,  52,  50,  48,  30,  26,  28,  24,
      0,  25,  29,  27,  31,  49,  51,  53,  55,  57,  61,  59,  63, 257, 259, 261,
    263, 265, 267, 741, 743, 135, 173, 175, 341, 369, 435, 451,   5,  83, 117, 167,
    165, 343, 433, 449,   1,   3,  81,  85, 119, 169, 187, 219, 227,   5,  35,  57,
     81,  87,  95, 111, 115,  19,  23,  31,  45,  53,  59,   3,  13,  25,  31,   9,
];

#[rustfmt::skip]
const SPECTRUM_B_7_3_BITS: [u8; 128] = [
     3,  4,  5,  5,  5,  5,  6,  6,  6,  6,  6,  6,  7,  7,  7,  7,
     7,  7,  7,  7,  8,  8,  8,  8,  8,  8,  8,  8,  8,  9,  9,  9,
     8,  8,  8,  8,  8,  9,  9,  9,  9,  9,  9,  9, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
     0, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10,  9,  9,  9,  9,  9,  9,  9,  8,  8,  8,  8,
     8,  9,  9,  9,  8,  8,  8,  8,  8,  8,  8,  8,  8,  7,  7,  7,
     7,  7,  7,  7,  7,  6,  6,  6,  6,  6,  6,  5,  5,  5,  5,  4,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_1_CODES: [u16; 2] = [
    0, 1,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_1_BITS: [u8; 2] = [
     1,  1,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_2_CODES: [u16; 4] = [
    0, 6, 7, 2,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_2_BITS: [u8; 4] = [
     1,  3,  3,  2,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_3_CODES: [u16; 8] = [
     0,  1, 14, 62, 63, 30,  6,  2,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_3_BITS: [u8; 8] = [
     2,  2,  4,  6,  6,  5,  3,  2,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_4_CODES: [u16; 16] = [
     1,  2,  0,  6, 15, 19, 35, 36, 37, 34, 33, 32, 14,  5,  1,  3,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_4_BITS: [u8; 16] = [
     2,  2,  4,  5,  6,  7,  8,  8,  8,  8,  8,  8,  6,  5,  4,  2,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_5_CODES: [u16; 32] = [
      2,   1,   7,  13,  12,  24,  27,  33,  63, 106, 107, 104, 115, 121, 124, 125,
    122, 123, 120, 114,  68,  69,  71,  70, 105,  56,  32,  29,  25,   9,   5,   0,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_5_BITS: [u8; 32] = [
     2,  3,  3,  4,  5,  5,  6,  7,  7,  8,  8,  8,  8,  8,  8,  8,
     8,  8,  8,  8,  8,  8,  8,  8,  8,  7,  7,  6,  5,  5,  4,  3,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_6_CODES: [u16; 64] = [
      0,   1,   4,   5,  18,  19,  46,  47,  48, 102, 103, 214, 215, 216, 217, 218,
    219, 220, 221, 222, 223, 224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234,
    235, 236, 237, 238, 239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250,
    251, 252, 253, 254, 255, 104, 105, 106,  49,  50,  20,  21,  22,   6,   7,   8,
];

#[rustfmt::skip]
const SCALE_FACTOR_UNSIGNED_6_BITS: [u8; 64] = [
     3,  3,  4,  4,  5,  5,  6,  6,  6,  7,  7,  8,  8,  8,  8,  8,
     8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,
     8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,
     8,  8,  8,  8,  8,  7,  7,  7,  6,  6,  5,  5,  5,  4,  4,  4,
];

#[rustfmt::skip]
const SCALE_FACTOR_SIGNED_2_CODES: [u16; 4] = [
    0, 3, 0, 2,
];

#[rustfmt::skip]
const SCALE_FACTOR_SIGNED_2_BITS: [u8; 4] = [
     1,  2,  0,  2,
];

#[rustfmt::skip]
const SCALE_FACTOR_SIGNED_3_CODES: [u16; 8] = [
     1,  0,  4, 11,  0, 10,  3,  1,
];

#[rustfmt::skip]
const SCALE_FACTOR_SIGNED_3_BITS: [u8; 8] = [
     1,  3,  5,  6,  0,  6,  4,  2,
];

#[rustfmt::skip]
const SCALE_FACTOR_SIGNED_4_CODES: [u16; 16] = [
     1,  1,  4, 14, 15, 44, 90, 93,  0, 92, 91, 47, 21, 20,  6,  0,
];

#[rustfmt::skip]
const SCALE_FACTOR_SIGNED_4_BITS: [u8; 16] = [
     1,  3,  4,  5,  5,  7,  8,  8,  0,  8,  8,  7,  6,  6,  4,  3,
];

#[rustfmt::skip]
const SCALE_FACTOR_SIGNED_5_CODES: [u16; 32] = [
      0,   5,   7,  12,   4,   2,   3,   5,   9,  16,  35,  51,  54, 110,  96, 101,
     98,  97,  99, 100, 111, 109, 108, 107, 106, 104, 105,  69,  68,  55,  26,   7,
];

#[rustfmt::skip]
const SCALE_FACTOR_SIGNED_5_BITS: [u8; 32] = [
     3,  3,  4,  4,  4,  4,  4,  4,  4,  5,  6,  7,  7,  7,  8,  8,
     8,  8,  8,  8,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  6,  3,
];

/// Spectrum codebooks of the default family, indexed `[precision][codebook]`.
pub static SPECTRUM_A: [[Option<HuffmanSource>; 4]; 8] = [
    [None, None, None, None],
    [None, None, None, None],
    [
        Some(HuffmanSource::new(&SPECTRUM_A_2_0_CODES, &SPECTRUM_A_2_0_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_A_2_1_CODES, &SPECTRUM_A_2_1_BITS, 2)),
        Some(HuffmanSource::new(&SPECTRUM_A_2_2_CODES, &SPECTRUM_A_2_2_BITS, 2)),
        Some(HuffmanSource::new(&SPECTRUM_A_2_3_CODES, &SPECTRUM_A_2_3_BITS, 2)),
    ],
    [
        Some(HuffmanSource::new(&SPECTRUM_A_3_0_CODES, &SPECTRUM_A_3_0_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_A_3_1_CODES, &SPECTRUM_A_3_1_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_A_3_2_CODES, &SPECTRUM_A_3_2_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_A_3_3_CODES, &SPECTRUM_A_3_3_BITS, 1)),
    ],
    [
        Some(HuffmanSource::new(&SPECTRUM_A_4_0_CODES, &SPECTRUM_A_4_0_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_A_4_1_CODES, &SPECTRUM_A_4_1_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_A_4_2_CODES, &SPECTRUM_A_4_2_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_A_4_3_CODES, &SPECTRUM_A_4_3_BITS, 1)),
    ],
    [
        Some(HuffmanSource::new(&SPECTRUM_A_5_0_CODES, &SPECTRUM_A_5_0_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_A_5_1_CODES, &SPECTRUM_A_5_1_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_A_5_2_CODES, &SPECTRUM_A_5_2_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_A_5_3_CODES, &SPECTRUM_A_5_3_BITS, 0)),
    ],
    [
        Some(HuffmanSource::new(&SPECTRUM_A_6_0_CODES, &SPECTRUM_A_6_0_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_A_6_1_CODES, &SPECTRUM_A_6_1_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_A_6_2_CODES, &SPECTRUM_A_6_2_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_A_6_3_CODES, &SPECTRUM_A_6_3_BITS, 0)),
    ],
    [
        Some(HuffmanSource::new(&SPECTRUM_A_7_0_CODES, &SPECTRUM_A_7_0_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_A_7_1_CODES, &SPECTRUM_A_7_1_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_A_7_2_CODES, &SPECTRUM_A_7_2_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_A_7_3_CODES, &SPECTRUM_A_7_3_BITS, 0)),
    ],
];

/// Spectrum codebooks selected for units flagged by the codebook-set heuristic.
pub static SPECTRUM_B: [[Option<HuffmanSource>; 4]; 8] = [
    [None, None, None, None],
    [None, None, None, None],
    [
        None,
        Some(HuffmanSource::new(&SPECTRUM_B_2_1_CODES, &SPECTRUM_B_2_1_BITS, 2)),
        Some(HuffmanSource::new(&SPECTRUM_B_2_2_CODES, &SPECTRUM_B_2_2_BITS, 2)),
        Some(HuffmanSource::new(&SPECTRUM_B_2_3_CODES, &SPECTRUM_B_2_3_BITS, 2)),
    ],
    [
        None,
        Some(HuffmanSource::new(&SPECTRUM_B_3_1_CODES, &SPECTRUM_B_3_1_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_B_3_2_CODES, &SPECTRUM_B_3_2_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_B_3_3_CODES, &SPECTRUM_B_3_3_BITS, 1)),
    ],
    [
        None,
        Some(HuffmanSource::new(&SPECTRUM_B_4_1_CODES, &SPECTRUM_B_4_1_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_B_4_2_CODES, &SPECTRUM_B_4_2_BITS, 1)),
        Some(HuffmanSource::new(&SPECTRUM_B_4_3_CODES, &SPECTRUM_B_4_3_BITS, 1)),
    ],
    [
        None,
        Some(HuffmanSource::new(&SPECTRUM_B_5_1_CODES, &SPECTRUM_B_5_1_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_B_5_2_CODES, &SPECTRUM_B_5_2_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_B_5_3_CODES, &SPECTRUM_B_5_3_BITS, 0)),
    ],
    [
        None,
        Some(HuffmanSource::new(&SPECTRUM_B_6_1_CODES, &SPECTRUM_B_6_1_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_B_6_2_CODES, &SPECTRUM_B_6_2_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_B_6_3_CODES, &SPECTRUM_B_6_3_BITS, 0)),
    ],
    [
        None,
        Some(HuffmanSource::new(&SPECTRUM_B_7_1_CODES, &SPECTRUM_B_7_1_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_B_7_2_CODES, &SPECTRUM_B_7_2_BITS, 0)),
        Some(HuffmanSource::new(&SPECTRUM_B_7_3_CODES, &SPECTRUM_B_7_3_BITS, 0)),
    ],
];

/// Scale-factor delta codebooks indexed by bit length.
pub static SCALE_FACTOR_UNSIGNED: [Option<HuffmanSource>; 7] = [
    None,
    Some(HuffmanSource::new(&SCALE_FACTOR_UNSIGNED_1_CODES, &SCALE_FACTOR_UNSIGNED_1_BITS, 0)),
    Some(HuffmanSource::new(&SCALE_FACTOR_UNSIGNED_2_CODES, &SCALE_FACTOR_UNSIGNED_2_BITS, 0)),
    Some(HuffmanSource::new(&SCALE_FACTOR_UNSIGNED_3_CODES, &SCALE_FACTOR_UNSIGNED_3_BITS, 0)),
    Some(HuffmanSource::new(&SCALE_FACTOR_UNSIGNED_4_CODES, &SCALE_FACTOR_UNSIGNED_4_BITS, 0)),
    Some(HuffmanSource::new(&SCALE_FACTOR_UNSIGNED_5_CODES, &SCALE_FACTOR_UNSIGNED_5_BITS, 0)),
    Some(HuffmanSource::new(&SCALE_FACTOR_UNSIGNED_6_CODES, &SCALE_FACTOR_UNSIGNED_6_BITS, 0)),
];

/// Scale-factor distance codebooks indexed by bit length.
pub static SCALE_FACTOR_SIGNED: [Option<HuffmanSource>; 6] = [
    None,
    None,
    Some(HuffmanSource::new(&SCALE_FACTOR_SIGNED_2_CODES, &SCALE_FACTOR_SIGNED_2_BITS, 0)),
    Some(HuffmanSource::new(&SCALE_FACTOR_SIGNED_3_CODES, &SCALE_FACTOR_SIGNED_3_BITS, 0)),
    Some(HuffmanSource::new(&SCALE_FACTOR_SIGNED_4_CODES, &SCALE_FACTOR_SIGNED_4_BITS, 0)),
    Some(HuffmanSource::new(&SCALE_FACTOR_SIGNED_5_CODES, &SCALE_FACTOR_SIGNED_5_BITS, 0)),
];
