//! Precomputed polyphase filter banks.
//!
//! Kaiser windowed sinc prototypes (beta 7) stored phase-major: phase `p` occupies
//! `bank[p * taps_per_phase..(p + 1) * taps_per_phase]` and holds prototype taps
//! `p, p + up, p + 2 * up, ...`. Every phase is normalised to a DC sum of `1 / up`.
//!
//! Front banks have 40 taps per phase with the cutoff at 0.45 of the lower of the source and
//! intermediate rate. Back banks have 48 taps per unit of decimation (96 for a factor of 2,
//! 144 for 3) with the cutoff at 0.45 of the lowest of the source, intermediate and target
//! rate. Anything at or above the output Nyquist frequency is attenuated by more than 70 dB.

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::Float;

pub(super) static SIX_TO_FIVE_FRONT: [Float; 200] = [
    -5.29406725e-06, -1.63934055e-06, 3.65746018e-05, -1.19266108e-04, 2.66209390e-04, -4.81387193e-04,
    7.45839381e-04, -1.00874156e-03, 1.18310610e-03, -1.14880840e-03, 7.64299068e-04, 1.13746093e-04,
    -1.60609058e-03, 3.78763373e-03, -6.67314418e-03, 1.02232117e-02, -1.43912118e-02, 1.92755666e-02,
    -2.57040299e-02, 3.94978411e-02, 1.77602410e-01, 1.80002360e-03, -9.90448147e-03, 1.16304187e-02,
    -1.11775845e-02, 9.65813361e-03, -7.64161535e-03, 5.51485224e-03, -3.55174742e-03, 1.92670734e-03,
    -7.21706252e-04, -6.04215966e-05, 4.75363719e-04, -6.12680800e-04, 5.71740617e-04, -4.42333228e-04,
    2.92487792e-04, -1.64044657e-04, 7.47772283e-05, -2.47205608e-05, -1.81233445e-05, 3.12045158e-05,
    -2.67317992e-05, -2.03704276e-05, 1.40269331e-04, -3.60143982e-04, 6.92377624e-04, -1.12095103e-03,
    1.58908218e-03, -1.99160958e-03, 2.17506988e-03, -1.94671145e-03, 1.09082996e-03, 6.13218581e-04,
    -3.38305160e-03, 7.45953526e-03, -1.32298106e-02, 2.16744766e-02, -3.64118703e-02, 8.31371099e-02,
    1.59071431e-01, -2.45871246e-02, 5.78190340e-03, 1.65992300e-03, -5.04646730e-03, 6.28885161e-03,
    -6.23799022e-03, 5.42567624e-03, -4.24166070e-03, 2.97666737e-03, -1.83125993e-03, 9.20907885e-04,
    -2.86651921e-04, -8.76119229e-05, 2.53961567e-04, -2.79382570e-04, 2.28431512e-04, -1.51907079e-04,
    8.20932692e-05, -3.35992809e-05, -2.96522176e-05, 6.35903925e-05, -9.78718454e-05, 1.08970242e-04,
    -6.04919114e-05, -9.23915723e-05, 3.93127732e-04, -8.69177456e-04, 1.51473819e-03, -2.27414770e-03,
    3.02974740e-03, -3.59716709e-03, 3.72853945e-03, -3.11954436e-03, 1.40756683e-03, 1.87167688e-03,
    -7.46551808e-03, 1.71069764e-02, -3.71277295e-02, 1.25508755e-01, 1.25508755e-01, -3.71277295e-02,
    1.71069764e-02, -7.46551808e-03, 1.87167688e-03, 1.40756683e-03, -3.11954436e-03, 3.72853945e-03,
    -3.59716709e-03, 3.02974740e-03, -2.27414770e-03, 1.51473819e-03, -8.69177456e-04, 3.93127732e-04,
    -9.23915723e-05, -6.04919114e-05, 1.08970242e-04, -9.78718454e-05, 6.35903925e-05, -2.96522176e-05,
    -3.35992809e-05, 8.20932692e-05, -1.51907079e-04, 2.28431512e-04, -2.79382570e-04, 2.53961567e-04,
    -8.76119229e-05, -2.86651921e-04, 9.20907885e-04, -1.83125993e-03, 2.97666737e-03, -4.24166070e-03,
    5.42567624e-03, -6.23799022e-03, 6.28885161e-03, -5.04646730e-03, 1.65992300e-03, 5.78190340e-03,
    -2.45871246e-02, 1.59071431e-01, 8.31371099e-02, -3.64118703e-02, 2.16744766e-02, -1.32298106e-02,
    7.45953526e-03, -3.38305160e-03, 6.13218581e-04, 1.09082996e-03, -1.94671145e-03, 2.17506988e-03,
    -1.99160958e-03, 1.58908218e-03, -1.12095103e-03, 6.92377624e-04, -3.60143982e-04, 1.40269331e-04,
    -2.03704276e-05, -2.67317992e-05, 3.12045158e-05, -1.81233445e-05, -2.47205608e-05, 7.47772283e-05,
    -1.64044657e-04, 2.92487792e-04, -4.42333228e-04, 5.71740617e-04, -6.12680800e-04, 4.75363719e-04,
    -6.04215966e-05, -7.21706252e-04, 1.92670734e-03, -3.55174742e-03, 5.51485224e-03, -7.64161535e-03,
    9.65813361e-03, -1.11775845e-02, 1.16304187e-02, -9.90448147e-03, 1.80002360e-03, 1.77602410e-01,
    3.94978411e-02, -2.57040299e-02, 1.92755666e-02, -1.43912118e-02, 1.02232117e-02, -6.67314418e-03,
    3.78763373e-03, -1.60609058e-03, 1.13746093e-04, 7.64299068e-04, -1.14880840e-03, 1.18310610e-03,
    -1.00874156e-03, 7.45839381e-04, -4.81387193e-04, 2.66209390e-04, -1.19266108e-04, 3.65746018e-05,
    -1.63934055e-06, -5.29406725e-06,
];

pub(super) static SIX_TO_FIVE_BACK: [Float; 96] = [
    -3.67222165e-05, 1.49692924e-05, 9.49500682e-05, 1.05279087e-05, -1.77078895e-04, -9.19547820e-05,
    2.64388596e-04, 2.55202147e-04, -3.18532489e-04, -5.15248743e-04, 2.81743269e-04, 8.63623165e-04,
    -8.33326121e-05, -1.25635066e-03, -3.46622168e-04, 1.60596031e-03, 1.05714297e-03, -1.78125536e-03,
    -2.05238792e-03, 1.61775725e-03, 3.26816598e-03, -9.40014550e-04, -4.55422653e-03, -4.05406114e-04,
    5.66750253e-03, 2.50997883e-03, -6.28000544e-03, -5.36212046e-03, 6.00227062e-03, 8.81158281e-03,
    -4.41929745e-03, -1.25449179e-02, 1.13113120e-03, 1.60737894e-02, 4.21578204e-03, -1.87297352e-02,
    -1.19299032e-02, 1.96414832e-02, 2.23548822e-02, -1.76250376e-02, -3.61515656e-02, 1.07563008e-02,
    5.52364178e-02, 5.39047830e-03, -8.68889913e-02, -4.82891053e-02, 1.80351734e-01, 4.13302064e-01,
    4.13302064e-01, 1.80351734e-01, -4.82891053e-02, -8.68889913e-02, 5.39047830e-03, 5.52364178e-02,
    1.07563008e-02, -3.61515656e-02, -1.76250376e-02, 2.23548822e-02, 1.96414832e-02, -1.19299032e-02,
    -1.87297352e-02, 4.21578204e-03, 1.60737894e-02, 1.13113120e-03, -1.25449179e-02, -4.41929745e-03,
    8.81158281e-03, 6.00227062e-03, -5.36212046e-03, -6.28000544e-03, 2.50997883e-03, 5.66750253e-03,
    -4.05406114e-04, -4.55422653e-03, -9.40014550e-04, 3.26816598e-03, 1.61775725e-03, -2.05238792e-03,
    -1.78125536e-03, 1.05714297e-03, 1.60596031e-03, -3.46622168e-04, -1.25635066e-03, -8.33326121e-05,
    8.63623165e-04, 2.81743269e-04, -5.15248743e-04, -3.18532489e-04, 2.55202147e-04, 2.64388596e-04,
    -9.19547820e-05, -1.77078895e-04, 1.05279087e-05, 9.49500682e-05, 1.49692924e-05, -3.67222165e-05,
];

pub(super) static SEVEN_TO_EIGHT_FRONT: [Float; 640] = [
    -5.21462255e-07, -3.62851301e-06, 1.72099917e-05, -4.54370638e-05, 9.16290592e-05, -1.54386071e-04,
    2.24718155e-04, -2.83990870e-04, 3.03593639e-04, -2.47017189e-04, 7.45465441e-05, 2.49881414e-04,
    -7.50796811e-04, 1.43398589e-03, -2.28193798e-03, 3.25400918e-03, -4.29372955e-03, 5.34885563e-03,
    -6.43175934e-03, 7.98373856e-03, 5.61774708e-02, 4.28204332e-03, -4.86892927e-03, 4.59085451e-03,
    -3.97413783e-03, 3.19682411e-03, -2.37697898e-03, 1.60462002e-03, -9.43509163e-04, 4.29812120e-04,
    -7.32294284e-05, -1.38542848e-04, 2.32870821e-04, -2.44280061e-04, 2.07173856e-04, -1.50393549e-04,
    9.42441475e-05, -4.99663038e-05, 2.11163915e-05, -6.02603450e-06, -1.67422729e-06, -8.36998254e-07,
    1.23799900e-05, -3.90600944e-05, 8.58157000e-05, -1.53523724e-04, 2.35788903e-04, -3.16258112e-04,
    3.67420143e-04, -3.51707247e-04, 2.25289434e-04, 5.57064232e-05, -5.27585507e-04, 1.21185731e-03,
    -2.11083260e-03, 3.20938486e-03, -4.48896876e-03, 5.97256888e-03, -7.89527688e-03, 1.19367838e-02,
    5.55915087e-02, 8.83891073e-04, -3.25778918e-03, 3.72747122e-03, -3.54471733e-03, 3.04312585e-03,
    -2.39554117e-03, 1.72016316e-03, -1.10075937e-03, 5.90402866e-04, -2.13557447e-04, -2.97949155e-05,
    1.57725066e-04, -1.98680456e-04, 1.84003657e-04, -1.41918004e-04, 9.37593722e-05, -5.26220210e-05,
    2.40413392e-05, -7.98398196e-06, -2.94642973e-06, 2.28302792e-06, 6.72214219e-06, -3.09266761e-05,
    7.68071914e-05, -1.47574858e-04, 2.39707879e-04, -3.39697290e-04, 4.21994017e-04, -4.49083920e-04,
    3.74255033e-04, -1.46981780e-04, -2.79975386e-04, 9.43574880e-04, -1.86647137e-03, 3.06062005e-03,
    -4.54855151e-03, 6.43567648e-03, -9.20778885e-03, 1.60817634e-02, 5.44297658e-02, -2.16641673e-03,
    -1.64753955e-03, 2.78932671e-03, -3.02268215e-03, 2.80091818e-03, -2.33953004e-03, 1.77880307e-03,
    -1.21882255e-03, 7.27316248e-04, -3.42338724e-04, 7.58352762e-05, 8.06697790e-05, -1.48863648e-04,
    1.56191309e-04, -1.29452834e-04, 9.03655746e-05, -5.34403043e-05, 2.59638564e-05, -9.47648368e-06,
    -4.29748570e-06, 5.64689299e-06, 3.70017290e-07, -2.11961560e-05, 6.47170600e-05, -1.36468501e-04,
    2.36004926e-04, -3.53157287e-04, 4.65169200e-04, -5.35723753e-04, 5.16584900e-04, -3.51973664e-04,
    -1.50687165e-05, 6.36156474e-04, -1.55412464e-03, 2.80863978e-03, -4.46501747e-03, 6.71554124e-03,
    -1.03184320e-02, 2.03534961e-02, 5.27142026e-02, -4.83317208e-03, -8.45711547e-05, 1.80794590e-03,
    -2.42745248e-03, 2.48068199e-03, -2.21311767e-03, 1.78056653e-03, -1.29532174e-03, 8.37100262e-04,
    -4.55976318e-04, 1.75174951e-04, 4.18424679e-06, -9.65676227e-05, 1.24825543e-04, -1.13595888e-04,
    8.43378439e-05, -5.25157520e-05, 2.68986532e-05, -1.04969113e-05, -5.67828738e-06, 9.15246892e-06,
    -6.50742822e-06, -1.00939005e-05, 4.97700457e-05, -1.20302480e-04, 2.24439835e-04, -3.55764583e-04,
    4.95084911e-04, -6.08422211e-04, 6.47460809e-04, -5.52772195e-04, 2.59240129e-04, 2.98102794e-04,
    -1.18140120e-03, 2.45765829e-03, -4.23506554e-03, 6.79396512e-03, -1.11784190e-02, 2.46822909e-02,
    5.04771583e-02, -7.08994363e-03, 1.38867775e-03, 8.14736006e-04, -1.77992764e-03, 2.09492329e-03,
    -2.02250574e-03, 1.72723795e-03, -1.32924656e-03, 9.17262514e-04, -5.51471661e-04, 2.65365437e-04,
    -6.93679831e-05, -4.35345610e-05, 9.10572053e-05, -9.50226386e-05, 7.60204566e-05, -4.99939742e-05,
    2.68927761e-05, -1.10564242e-05, -7.03251999e-06, 1.26826380e-05, -1.37093939e-05, 2.09236919e-06,
    3.23007916e-05, -9.93487920e-05, 2.05021104e-04, -3.46963992e-04, 5.10237878e-04, -6.64306222e-04,
    7.62262207e-04, -7.42792210e-04, 5.34491381e-04, -6.08246664e-05, -7.58086680e-04, 2.01516412e-03,
    -3.85981938e-03, 6.65793242e-03, -1.17423423e-02, 2.89953779e-02, 4.77606170e-02, -8.91989749e-03,
    2.73462106e-03, -1.59913048e-04, -1.10180851e-03, 1.65772566e-03, -1.77567033e-03, 1.62224739e-03,
    -1.32094091e-03, 9.66316031e-04, -6.26497320e-04, 3.43940366e-04, -1.37809111e-04, 8.54460905e-06,
    5.60596163e-05, -7.44605422e-05, 6.58117642e-05, -4.60635056e-05, 2.60216293e-05, -1.11820345e-05,
    -8.29841701e-06, 1.61085536e-05, -2.10082126e-05, 1.50186934e-05, 1.27485328e-05, -7.40532996e-05,
    1.78017202e-04, -3.26550478e-04, 5.09545789e-04, -7.00939912e-04, 8.56722938e-04, -9.15569661e-04,
    8.01912160e-04, -4.29873005e-04, -2.95907492e-04, 1.49180379e-03, -3.34496936e-03, 6.30023330e-03,
    -1.19694378e-02, 3.32184583e-02, 4.46152613e-02, -1.03158886e-02, 3.92126851e-03, -1.08746381e-03,
    -4.14919545e-04, 1.18426804e-03, -1.48205890e-03, 1.47051259e-03, -1.27204764e-03, 9.83792241e-04,
    -6.79446792e-04, 4.08888765e-04, -1.99208487e-04, 5.80816813e-05, 2.09900936e-05, -5.26629810e-05,
    5.41481495e-05, -4.09467648e-05, 2.43842533e-05, -1.09142075e-05, -9.41091639e-06, 1.92936241e-05,
    -2.81556549e-05, 2.82933561e-05, -8.35200899e-06, -4.50294829e-05, 1.43959594e-04, -2.94690777e-04,
    4.92399500e-04, -7.16420473e-04, 9.27081564e-04, -1.06497388e-03, 1.05268706e-03, -7.97607529e-04,
    1.91774117e-04, 9.01163381e-04, -2.70078424e-03, 5.71995229e-03, -1.18247736e-02, 3.72772962e-02,
    4.10993248e-02, -1.12803197e-02, 4.92279930e-03, -1.94198196e-03, 2.59449647e-04, 6.90326618e-04,
    -1.15225348e-03, 1.27823919e-03, -1.18541613e-03, 9.70221125e-04, -7.09459244e-04, 4.58701397e-04,
    -2.51933816e-04, 1.03637161e-04, -1.30462668e-05, -3.03835986e-05, 4.14875722e-05, -3.48904468e-05,
    2.20981165e-05, -1.03041511e-05, -1.03041511e-05, 2.20981165e-05, -3.48904468e-05, 4.14875722e-05,
    -3.03835986e-05, -1.30462668e-05, 1.03637161e-04, -2.51933816e-04, 4.58701397e-04, -7.09459244e-04,
    9.70221125e-04, -1.18541613e-03, 1.27823919e-03, -1.15225348e-03, 6.90326618e-04, 2.59449647e-04,
    -1.94198196e-03, 4.92279930e-03, -1.12803197e-02, 4.10993248e-02, 3.72772962e-02, -1.18247736e-02,
    5.71995229e-03, -2.70078424e-03, 9.01163381e-04, 1.91774117e-04, -7.97607529e-04, 1.05268706e-03,
    -1.06497388e-03, 9.27081564e-04, -7.16420473e-04, 4.92399500e-04, -2.94690777e-04, 1.43959594e-04,
    -4.50294829e-05, -8.35200899e-06, 2.82933561e-05, -2.81556549e-05, 1.92936241e-05, -9.41091639e-06,
    -1.09142075e-05, 2.43842533e-05, -4.09467648e-05, 5.41481495e-05, -5.26629810e-05, 2.09900936e-05,
    5.80816813e-05, -1.99208487e-04, 4.08888765e-04, -6.79446792e-04, 9.83792241e-04, -1.27204764e-03,
    1.47051259e-03, -1.48205890e-03, 1.18426804e-03, -4.14919545e-04, -1.08746381e-03, 3.92126851e-03,
    -1.03158886e-02, 4.46152613e-02, 3.32184583e-02, -1.19694378e-02, 6.30023330e-03, -3.34496936e-03,
    1.49180379e-03, -2.95907492e-04, -4.29873005e-04, 8.01912160e-04, -9.15569661e-04, 8.56722938e-04,
    -7.00939912e-04, 5.09545789e-04, -3.26550478e-04, 1.78017202e-04, -7.40532996e-05, 1.27485328e-05,
    1.50186934e-05, -2.10082126e-05, 1.61085536e-05, -8.29841701e-06, -1.11820345e-05, 2.60216293e-05,
    -4.60635056e-05, 6.58117642e-05, -7.44605422e-05, 5.60596163e-05, 8.54460905e-06, -1.37809111e-04,
    3.43940366e-04, -6.26497320e-04, 9.66316031e-04, -1.32094091e-03, 1.62224739e-03, -1.77567033e-03,
    1.65772566e-03, -1.10180851e-03, -1.59913048e-04, 2.73462106e-03, -8.91989749e-03, 4.77606170e-02,
    2.89953779e-02, -1.17423423e-02, 6.65793242e-03, -3.85981938e-03, 2.01516412e-03, -7.58086680e-04,
    -6.08246664e-05, 5.34491381e-04, -7.42792210e-04, 7.62262207e-04, -6.64306222e-04, 5.10237878e-04,
    -3.46963992e-04, 2.05021104e-04, -9.93487920e-05, 3.23007916e-05, 2.09236919e-06, -1.37093939e-05,
    1.26826380e-05, -7.03251999e-06, -1.10564242e-05, 2.68927761e-05, -4.99939742e-05, 7.60204566e-05,
    -9.50226386e-05, 9.10572053e-05, -4.35345610e-05, -6.93679831e-05, 2.65365437e-04, -5.51471661e-04,
    9.17262514e-04, -1.32924656e-03, 1.72723795e-03, -2.02250574e-03, 2.09492329e-03, -1.77992764e-03,
    8.14736006e-04, 1.38867775e-03, -7.08994363e-03, 5.04771583e-02, 2.46822909e-02, -1.11784190e-02,
    6.79396512e-03, -4.23506554e-03, 2.45765829e-03, -1.18140120e-03, 2.98102794e-04, 2.59240129e-04,
    -5.52772195e-04, 6.47460809e-04, -6.08422211e-04, 4.95084911e-04, -3.55764583e-04, 2.24439835e-04,
    -1.20302480e-04, 4.97700457e-05, -1.00939005e-05, -6.50742822e-06, 9.15246892e-06, -5.67828738e-06,
    -1.04969113e-05, 2.68986532e-05, -5.25157520e-05, 8.43378439e-05, -1.13595888e-04, 1.24825543e-04,
    -9.65676227e-05, 4.18424679e-06, 1.75174951e-04, -4.55976318e-04, 8.37100262e-04, -1.29532174e-03,
    1.78056653e-03, -2.21311767e-03, 2.48068199e-03, -2.42745248e-03, 1.80794590e-03, -8.45711547e-05,
    -4.83317208e-03, 5.27142026e-02, 2.03534961e-02, -1.03184320e-02, 6.71554124e-03, -4.46501747e-03,
    2.80863978e-03, -1.55412464e-03, 6.36156474e-04, -1.50687165e-05, -3.51973664e-04, 5.16584900e-04,
    -5.35723753e-04, 4.65169200e-04, -3.53157287e-04, 2.36004926e-04, -1.36468501e-04, 6.47170600e-05,
    -2.11961560e-05, 3.70017290e-07, 5.64689299e-06, -4.29748570e-06, -9.47648368e-06, 2.59638564e-05,
    -5.34403043e-05, 9.03655746e-05, -1.29452834e-04, 1.56191309e-04, -1.48863648e-04, 8.06697790e-05,
    7.58352762e-05, -3.42338724e-04, 7.27316248e-04, -1.21882255e-03, 1.77880307e-03, -2.33953004e-03,
    2.80091818e-03, -3.02268215e-03, 2.78932671e-03, -1.64753955e-03, -2.16641673e-03, 5.44297658e-02,
    1.60817634e-02, -9.20778885e-03, 6.43567648e-03, -4.54855151e-03, 3.06062005e-03, -1.86647137e-03,
    9.43574880e-04, -2.79975386e-04, -1.46981780e-04, 3.74255033e-04, -4.49083920e-04, 4.21994017e-04,
    -3.39697290e-04, 2.39707879e-04, -1.47574858e-04, 7.68071914e-05, -3.09266761e-05, 6.72214219e-06,
    2.28302792e-06, -2.94642973e-06, -7.98398196e-06, 2.40413392e-05, -5.26220210e-05, 9.37593722e-05,
    -1.41918004e-04, 1.84003657e-04, -1.98680456e-04, 1.57725066e-04, -2.97949155e-05, -2.13557447e-04,
    5.90402866e-04, -1.10075937e-03, 1.72016316e-03, -2.39554117e-03, 3.04312585e-03, -3.54471733e-03,
    3.72747122e-03, -3.25778918e-03, 8.83891073e-04, 5.55915087e-02, 1.19367838e-02, -7.89527688e-03,
    5.97256888e-03, -4.48896876e-03, 3.20938486e-03, -2.11083260e-03, 1.21185731e-03, -5.27585507e-04,
    5.57064232e-05, 2.25289434e-04, -3.51707247e-04, 3.67420143e-04, -3.16258112e-04, 2.35788903e-04,
    -1.53523724e-04, 8.58157000e-05, -3.90600944e-05, 1.23799900e-05, -8.36998254e-07, -1.67422729e-06,
    -6.02603450e-06, 2.11163915e-05, -4.99663038e-05, 9.42441475e-05, -1.50393549e-04, 2.07173856e-04,
    -2.44280061e-04, 2.32870821e-04, -1.38542848e-04, -7.32294284e-05, 4.29812120e-04, -9.43509163e-04,
    1.60462002e-03, -2.37697898e-03, 3.19682411e-03, -3.97413783e-03, 4.59085451e-03, -4.86892927e-03,
    4.28204332e-03, 5.61774708e-02, 7.98373856e-03, -6.43175934e-03, 5.34885563e-03, -4.29372955e-03,
    3.25400918e-03, -2.28193798e-03, 1.43398589e-03, -7.50796811e-04, 2.49881414e-04, 7.45465441e-05,
    -2.47017189e-04, 3.03593639e-04, -2.83990870e-04, 2.24718155e-04, -1.54386071e-04, 9.16290592e-05,
    -4.54370638e-05, 1.72099917e-05, -3.62851301e-06, -5.21462255e-07,
];

pub(super) static SEVEN_TO_EIGHT_BACK: [Float; 96] = [
    3.19246719e-05, 5.29624667e-05, -2.49509521e-05, -1.33862079e-04, -7.13366608e-05, 1.78036615e-04,
    2.72010599e-04, -6.52763338e-05, -4.83634853e-04, -2.90072494e-04, 4.94405336e-04, 8.17151449e-04,
    -7.29311068e-05, -1.21617841e-03, -8.36968364e-04, 1.03545596e-03, 1.93020015e-03, 6.89801527e-05,
    -2.52286298e-03, -1.98753900e-03, 1.81854388e-03, 3.94129055e-03, 5.81439002e-04, -4.62657027e-03,
    -4.16152366e-03, 2.80419108e-03, 7.32220663e-03, 1.84845191e-03, -7.83213880e-03, -8.05235468e-03,
    3.89033137e-03, 1.29003199e-02, 4.58927965e-03, -1.27590001e-02, -1.51127372e-02, 4.92574833e-03,
    2.27425639e-02, 1.05829146e-02, -2.13903785e-02, -2.99028102e-02, 5.74139180e-03, 4.52754833e-02,
    2.75454894e-02, -4.51290719e-02, -8.28848779e-02, 6.19141711e-03, 2.02999532e-01, 3.68975341e-01,
    3.68975341e-01, 2.02999532e-01, 6.19141711e-03, -8.28848779e-02, -4.51290719e-02, 2.75454894e-02,
    4.52754833e-02, 5.74139180e-03, -2.99028102e-02, -2.13903785e-02, 1.05829146e-02, 2.27425639e-02,
    4.92574833e-03, -1.51127372e-02, -1.27590001e-02, 4.58927965e-03, 1.29003199e-02, 3.89033137e-03,
    -8.05235468e-03, -7.83213880e-03, 1.84845191e-03, 7.32220663e-03, 2.80419108e-03, -4.16152366e-03,
    -4.62657027e-03, 5.81439002e-04, 3.94129055e-03, 1.81854388e-03, -1.98753900e-03, -2.52286298e-03,
    6.89801527e-05, 1.93020015e-03, 1.03545596e-03, -8.36968364e-04, -1.21617841e-03, -7.29311068e-05,
    8.17151449e-04, 4.94405336e-04, -2.90072494e-04, -4.83634853e-04, -6.52763338e-05, 2.72010599e-04,
    1.78036615e-04, -7.13366608e-05, -1.33862079e-04, -2.49509521e-05, 5.29624667e-05, 3.19246719e-05,
];

pub(super) static NINE_TO_TEN_FRONT: [Float; 400] = [
    -1.33349135e-06, -4.46595368e-06, 2.51169495e-05, -6.94118498e-05, 1.43480807e-04, -2.46225682e-04,
    3.64539970e-04, -4.69690218e-04, 5.16343454e-04, -4.45412064e-04, 1.91142375e-04, 3.08182061e-04,
    -1.09770009e-03, 2.19435408e-03, -3.57960095e-03, 5.20036276e-03, -6.98381197e-03, 8.88093375e-03,
    -1.10131102e-02, 1.46331368e-02, 8.97007585e-02, 5.16559975e-03, -7.02095497e-03, 6.94546523e-03,
    -6.16820063e-03, 5.05482778e-03, -3.82262445e-03, 2.63017393e-03, -1.58965692e-03, 7.67306599e-04,
    -1.85760116e-04, -1.68891434e-04, 3.36167577e-04, -3.68596695e-04, 3.19921004e-04, -2.36092470e-04,
    1.50131033e-04, -8.08991317e-05, 3.49991351e-05, -1.05065965e-05, -4.40866415e-06, 3.09243137e-06,
    1.16023666e-05, -5.05256467e-05, 1.23819569e-04, -2.36300417e-04, 3.81939288e-04, -5.38724300e-04,
    6.65485510e-04, -7.02156569e-04, 5.74354955e-04, -2.02138719e-04, -4.88524849e-04, 1.55448553e-03,
    -3.02886218e-03, 4.92646499e-03, -7.27662165e-03, 1.02343392e-02, -1.45348907e-02, 2.50564069e-02,
    8.73139650e-02, -3.00494023e-03, -2.89127068e-03, 4.61626099e-03, -4.92429407e-03, 4.52424726e-03,
    -3.75513965e-03, 2.83845630e-03, -1.93203916e-03, 1.14204513e-03, -5.27187542e-04, 1.04572609e-04,
    1.41031225e-04, -2.45537813e-04, 2.53579259e-04, -2.08307902e-04, 1.44404592e-04, -8.48190102e-05,
    4.08750384e-05, -1.47365499e-05, -7.82146526e-06, 1.16724650e-05, -4.77884305e-06, -2.50962821e-05,
    9.15962082e-05, -2.05434830e-04, 3.68513545e-04, -5.67587616e-04, 7.69050559e-04, -9.16513673e-04,
    9.32464376e-04, -7.24359008e-04, 1.94093765e-04, 7.52046122e-04, -2.19843606e-03, 4.23070649e-03,
    -6.98786974e-03, 1.08481199e-02, -1.72514655e-02, 3.60240415e-02, 8.26533213e-02, -9.62229073e-03,
    1.06510043e-03, 2.09707208e-03, -3.37325409e-03, 3.67062725e-03, -3.39847011e-03, 2.81456183e-03,
    -2.10579578e-03, 1.40754413e-03, -8.08352430e-04, 3.53710289e-04, -5.28094897e-05, -1.11667468e-04,
    1.72332555e-04, -1.66491649e-04, 1.27872321e-04, -8.16356114e-05, 4.27495506e-05, -1.70653384e-05,
    -1.12475027e-05, 2.05960878e-05, -2.28924455e-05, 5.33439106e-06, 4.84128977e-05, -1.54492212e-04,
    3.23025772e-04, -5.51011472e-04, 8.15387990e-04, -1.06803642e-03, 1.23431848e-03, -1.21598924e-03,
    8.97905789e-04, -1.55822127e-04, -1.14087388e-03, 3.14495200e-03, -6.10189885e-03, 1.06103569e-02,
    -1.88485123e-02, 4.70763519e-02, 7.59428665e-02, -1.45260617e-02, 4.57709050e-03, -4.08309366e-04,
    -1.65255903e-03, 2.57763546e-03, -2.79538170e-03, 2.57226033e-03, -2.10608984e-03, 1.54885394e-03,
    -1.01057929e-03, 5.60405082e-04, -2.30204358e-04, 2.17429915e-05, 8.36941254e-05, -1.15100287e-04,
    1.02839367e-04, -7.23492194e-05, 4.09650238e-05, -1.75870900e-05, -1.42965928e-05, 2.90467051e-05,
    -4.12998343e-05, 3.86092725e-05, -3.01442060e-06, -8.61445878e-05, 2.46884912e-04, -4.87206707e-04,
    7.96902517e-04, -1.14028470e-03, 1.45164540e-03, -1.63471641e-03, 1.56608527e-03, -1.10023445e-03,
    6.97931464e-05, 1.73463789e-03, -4.65000654e-03, 9.46655031e-03, -1.90536901e-02, 5.77296242e-02,
    6.75025061e-02, -1.76566541e-02, 7.42818322e-03, -2.71103601e-03, 9.54582501e-05, 1.34290510e-03,
    -2.00558431e-03, 2.14167195e-03, -1.94192294e-03, 1.56157534e-03, -1.12244615e-03, 7.10955763e-04,
    -3.78256518e-04, 1.44223042e-04, -4.78905304e-06, -5.89947340e-05, 7.20884709e-05, -5.83577930e-05,
    3.61323764e-05, -1.65467845e-05, -1.65467845e-05, 3.61323764e-05, -5.83577930e-05, 7.20884709e-05,
    -5.89947340e-05, -4.78905304e-06, 1.44223042e-04, -3.78256518e-04, 7.10955763e-04, -1.12244615e-03,
    1.56157534e-03, -1.94192294e-03, 2.14167195e-03, -2.00558431e-03, 1.34290510e-03, 9.54582501e-05,
    -2.71103601e-03, 7.42818322e-03, -1.76566541e-02, 6.75025061e-02, 5.77296242e-02, -1.90536901e-02,
    9.46655031e-03, -4.65000654e-03, 1.73463789e-03, 6.97931464e-05, -1.10023445e-03, 1.56608527e-03,
    -1.63471641e-03, 1.45164540e-03, -1.14028470e-03, 7.96902517e-04, -4.87206707e-04, 2.46884912e-04,
    -8.61445878e-05, -3.01442060e-06, 3.86092725e-05, -4.12998343e-05, 2.90467051e-05, -1.42965928e-05,
    -1.75870900e-05, 4.09650238e-05, -7.23492194e-05, 1.02839367e-04, -1.15100287e-04, 8.36941254e-05,
    2.17429915e-05, -2.30204358e-04, 5.60405082e-04, -1.01057929e-03, 1.54885394e-03, -2.10608984e-03,
    2.57226033e-03, -2.79538170e-03, 2.57763546e-03, -1.65255903e-03, -4.08309366e-04, 4.57709050e-03,
    -1.45260617e-02, 7.59428665e-02, 4.70763519e-02, -1.88485123e-02, 1.06103569e-02, -6.10189885e-03,
    3.14495200e-03, -1.14087388e-03, -1.55822127e-04, 8.97905789e-04, -1.21598924e-03, 1.23431848e-03,
    -1.06803642e-03, 8.15387990e-04, -5.51011472e-04, 3.23025772e-04, -1.54492212e-04, 4.84128977e-05,
    5.33439106e-06, -2.28924455e-05, 2.05960878e-05, -1.12475027e-05, -1.70653384e-05, 4.27495506e-05,
    -8.16356114e-05, 1.27872321e-04, -1.66491649e-04, 1.72332555e-04, -1.11667468e-04, -5.28094897e-05,
    3.53710289e-04, -8.08352430e-04, 1.40754413e-03, -2.10579578e-03, 2.81456183e-03, -3.39847011e-03,
    3.67062725e-03, -3.37325409e-03, 2.09707208e-03, 1.06510043e-03, -9.62229073e-03, 8.26533213e-02,
    3.60240415e-02, -1.72514655e-02, 1.08481199e-02, -6.98786974e-03, 4.23070649e-03, -2.19843606e-03,
    7.52046122e-04, 1.94093765e-04, -7.24359008e-04, 9.32464376e-04, -9.16513673e-04, 7.69050559e-04,
    -5.67587616e-04, 3.68513545e-04, -2.05434830e-04, 9.15962082e-05, -2.50962821e-05, -4.77884305e-06,
    1.16724650e-05, -7.82146526e-06, -1.47365499e-05, 4.08750384e-05, -8.48190102e-05, 1.44404592e-04,
    -2.08307902e-04, 2.53579259e-04, -2.45537813e-04, 1.41031225e-04, 1.04572609e-04, -5.27187542e-04,
    1.14204513e-03, -1.93203916e-03, 2.83845630e-03, -3.75513965e-03, 4.52424726e-03, -4.92429407e-03,
    4.61626099e-03, -2.89127068e-03, -3.00494023e-03, 8.73139650e-02, 2.50564069e-02, -1.45348907e-02,
    1.02343392e-02, -7.27662165e-03, 4.92646499e-03, -3.02886218e-03, 1.55448553e-03, -4.88524849e-04,
    -2.02138719e-04, 5.74354955e-04, -7.02156569e-04, 6.65485510e-04, -5.38724300e-04, 3.81939288e-04,
    -2.36300417e-04, 1.23819569e-04, -5.05256467e-05, 1.16023666e-05, 3.09243137e-06, -4.40866415e-06,
    -1.05065965e-05, 3.49991351e-05, -8.08991317e-05, 1.50131033e-04, -2.36092470e-04, 3.19921004e-04,
    -3.68596695e-04, 3.36167577e-04, -1.68891434e-04, -1.85760116e-04, 7.67306599e-04, -1.58965692e-03,
    2.63017393e-03, -3.82262445e-03, 5.05482778e-03, -6.16820063e-03, 6.94546523e-03, -7.02095497e-03,
    5.16559975e-03, 8.97007585e-02, 1.46331368e-02, -1.10131102e-02, 8.88093375e-03, -6.98381197e-03,
    5.20036276e-03, -3.57960095e-03, 2.19435408e-03, -1.09770009e-03, 3.08182061e-04, 1.91142375e-04,
    -4.45412064e-04, 5.16343454e-04, -4.69690218e-04, 3.64539970e-04, -2.46225682e-04, 1.43480807e-04,
    -6.94118498e-05, 2.51169495e-05, -4.46595368e-06, -1.33349135e-06,
];

pub(super) static NINE_TO_TEN_BACK: [Float; 144] = [
    -2.16033695e-05, -4.02690284e-06, 3.28868337e-05, 6.31024377e-05, 5.17248554e-05, -1.39057820e-05,
    -1.00705518e-04, -1.40135788e-04, -7.62599302e-05, 7.84250151e-05, 2.27391894e-04, 2.43122020e-04,
    6.56769262e-05, -2.23728362e-04, -4.25165083e-04, -3.48872360e-04, 2.59547469e-05, 4.85726428e-04,
    6.89990178e-04, 4.10429842e-04, -2.58197950e-04, -8.91943346e-04, -9.91265639e-04, -3.54476128e-04,
    6.96439121e-04, 1.44837808e-03, 1.26290915e-03, 8.37249972e-05, -1.39913964e-03, -2.12521409e-03,
    -1.39806315e-03, 5.14907995e-04, 2.40145507e-03, 2.84376391e-03, 1.24894246e-03, -1.55700569e-03,
    -3.69756226e-03, -3.46671464e-03, -6.31721457e-04, 3.14462674e-03, 5.22445515e-03, 3.79215623e-03,
    -6.66371896e-04, -5.35188708e-03, -6.84925122e-03, -3.54828988e-03, 2.88515189e-03, 8.21873639e-03,
    8.35934747e-03, 2.37800018e-03, -6.31122384e-03, -1.17635923e-02, -9.44778975e-03, 2.16816916e-04,
    1.13599990e-02, 1.60376709e-02, 9.66615789e-03, -5.06348768e-03, -1.88461691e-02, -2.12930776e-02,
    -8.24064389e-03, 1.40011543e-02, 3.09782960e-02, 2.86015328e-02, 3.21292132e-03, -3.31763998e-02,
    -5.67094944e-02, -4.36611399e-02, 1.55147603e-02, 1.08128957e-01, 2.02530295e-01, 2.61928558e-01,
    2.61928558e-01, 2.02530295e-01, 1.08128957e-01, 1.55147603e-02, -4.36611399e-02, -5.67094944e-02,
    -3.31763998e-02, 3.21292132e-03, 2.86015328e-02, 3.09782960e-02, 1.40011543e-02, -8.24064389e-03,
    -2.12930776e-02, -1.88461691e-02, -5.06348768e-03, 9.66615789e-03, 1.60376709e-02, 1.13599990e-02,
    2.16816916e-04, -9.44778975e-03, -1.17635923e-02, -6.31122384e-03, 2.37800018e-03, 8.35934747e-03,
    8.21873639e-03, 2.88515189e-03, -3.54828988e-03, -6.84925122e-03, -5.35188708e-03, -6.66371896e-04,
    3.79215623e-03, 5.22445515e-03, 3.14462674e-03, -6.31721457e-04, -3.46671464e-03, -3.69756226e-03,
    -1.55700569e-03, 1.24894246e-03, 2.84376391e-03, 2.40145507e-03, 5.14907995e-04, -1.39806315e-03,
    -2.12521409e-03, -1.39913964e-03, 8.37249972e-05, 1.26290915e-03, 1.44837808e-03, 6.96439121e-04,
    -3.54476128e-04, -9.91265639e-04, -8.91943346e-04, -2.58197950e-04, 4.10429842e-04, 6.89990178e-04,
    4.85726428e-04, 2.59547469e-05, -3.48872360e-04, -4.25165083e-04, -2.23728362e-04, 6.56769262e-05,
    2.43122020e-04, 2.27391894e-04, 7.84250151e-05, -7.62599302e-05, -1.40135788e-04, -1.00705518e-04,
    -1.39057820e-05, 5.17248554e-05, 6.31024377e-05, 3.28868337e-05, -4.02690284e-06, -2.16033695e-05,
];

pub(super) static NINE_TO_EIGHT_FRONT: [Float; 320] = [
    -2.08098209e-06, -4.45382329e-06, 2.93234025e-05, -8.38773922e-05, 1.76452755e-04, -3.06636124e-04,
    4.59141826e-04, -5.99017658e-04, 6.70060806e-04, -5.97966195e-04, 2.98820785e-04, 3.07764683e-04,
    -1.28306495e-03, 2.65467446e-03, -4.40741656e-03, 6.48513483e-03, -8.81181750e-03, 1.13559086e-02,
    -1.43569447e-02, 1.98643506e-02, 1.11914687e-01, 5.08398190e-03, -8.13165307e-03, 8.33889004e-03,
    -7.54104136e-03, 6.25898363e-03, -4.78682015e-03, 3.33435857e-03, -2.04997347e-03, 1.02324877e-03,
    -2.88330513e-04, -1.67356891e-04, 3.89609602e-04, -4.41750686e-04, 3.89786903e-04, -2.90918746e-04,
    1.86804231e-04, -1.01713107e-04, 4.46381673e-05, -1.37890875e-05, -6.98188887e-06, 7.71098257e-06,
    7.13177815e-06, -5.18528286e-05, 1.40875985e-04, -2.83058209e-04, 4.74557950e-04, -6.91784837e-04,
    8.86419788e-04, -9.84463724e-04, 8.90623021e-04, -4.98092326e-04, -2.97912542e-04, 1.58652698e-03,
    -3.43365991e-03, 5.89110376e-03, -9.04653315e-03, 1.31968148e-02, -1.95812248e-02, 3.64114083e-02,
    1.07278518e-01, -7.09895417e-03, -1.71456381e-03, 4.60291188e-03, -5.46336919e-03, 5.29586570e-03,
    -4.56488552e-03, 3.56842880e-03, -2.52003316e-03, 1.56779017e-03, -8.00073263e-04, 2.52000988e-04,
    8.40152861e-05, -2.44425435e-04, 2.79789441e-04, -2.41718983e-04, 1.73455439e-04, -1.04947430e-04,
    5.21715119e-05, -1.95891225e-05, -1.23195487e-05, 2.13938256e-05, -1.98552334e-05, -8.13388760e-06,
    8.18616900e-05, -2.19087844e-04, 4.28671396e-04, -7.01975310e-04, 1.00492791e-03, -1.27292902e-03,
    1.41047407e-03, -1.29632710e-03, 7.93295039e-04, 2.40901194e-04, -1.94907747e-03, 4.49191732e-03,
    -8.12782627e-03, 1.35041503e-02, -2.29983740e-02, 5.36900386e-02, 9.83511582e-02, -1.61171332e-02,
    4.15881863e-03, 6.46325178e-04, -2.88523990e-03, 3.76084121e-03, -3.80704179e-03, 3.35695199e-03,
    -2.65548541e-03, 1.88678759e-03, -1.17963133e-03, 6.10105810e-04, -2.07709978e-04, -3.43442189e-05,
    1.46219478e-04, -1.68387443e-04, 1.40694887e-04, -9.50480971e-05, 5.21494403e-05, -2.17531833e-05,
    -1.72273758e-05, 3.47780406e-05, -4.85068158e-05, 4.27759005e-05, 4.66613983e-06, -1.19018841e-04,
    3.21654981e-04, -6.20907056e-04, 1.00197631e-03, -1.41814724e-03, 1.78555574e-03, -1.98303955e-03,
    1.85693696e-03, -1.22784823e-03, -1.08640845e-04, 2.40655825e-03, -6.07443601e-03, 1.20733557e-02,
    -2.38894280e-02, 7.05451891e-02, 8.57987180e-02, -2.17018500e-02, 8.89168214e-03, -3.04976339e-03,
    -1.49677624e-04, 1.87625282e-03, -2.63902778e-03, 2.75385357e-03, -2.46155588e-03, 1.95663702e-03,
    -1.39021524e-03, 8.68046598e-04, -4.51261585e-04, 1.61899676e-04, 7.49765468e-06, -8.23214650e-05,
    9.47481822e-05, -7.49526371e-05, 4.57432398e-05, -2.07013927e-05, -2.07013927e-05, 4.57432398e-05,
    -7.49526371e-05, 9.47481822e-05, -8.23214650e-05, 7.49765468e-06, 1.61899676e-04, -4.51261585e-04,
    8.68046598e-04, -1.39021524e-03, 1.95663702e-03, -2.46155588e-03, 2.75385357e-03, -2.63902778e-03,
    1.87625282e-03, -1.49677624e-04, -3.04976339e-03, 8.89168214e-03, -2.17018500e-02, 8.57987180e-02,
    7.05451891e-02, -2.38894280e-02, 1.20733557e-02, -6.07443601e-03, 2.40655825e-03, -1.08640845e-04,
    -1.22784823e-03, 1.85693696e-03, -1.98303955e-03, 1.78555574e-03, -1.41814724e-03, 1.00197631e-03,
    -6.20907056e-04, 3.21654981e-04, -1.19018841e-04, 4.66613983e-06, 4.27759005e-05, -4.85068158e-05,
    3.47780406e-05, -1.72273758e-05, -2.17531833e-05, 5.21494403e-05, -9.50480971e-05, 1.40694887e-04,
    -1.68387443e-04, 1.46219478e-04, -3.43442189e-05, -2.07709978e-04, 6.10105810e-04, -1.17963133e-03,
    1.88678759e-03, -2.65548541e-03, 3.35695199e-03, -3.80704179e-03, 3.76084121e-03, -2.88523990e-03,
    6.46325178e-04, 4.15881863e-03, -1.61171332e-02, 9.83511582e-02, 5.36900386e-02, -2.29983740e-02,
    1.35041503e-02, -8.12782627e-03, 4.49191732e-03, -1.94907747e-03, 2.40901194e-04, 7.93295039e-04,
    -1.29632710e-03, 1.41047407e-03, -1.27292902e-03, 1.00492791e-03, -7.01975310e-04, 4.28671396e-04,
    -2.19087844e-04, 8.18616900e-05, -8.13388760e-06, -1.98552334e-05, 2.13938256e-05, -1.23195487e-05,
    -1.95891225e-05, 5.21715119e-05, -1.04947430e-04, 1.73455439e-04, -2.41718983e-04, 2.79789441e-04,
    -2.44425435e-04, 8.40152861e-05, 2.52000988e-04, -8.00073263e-04, 1.56779017e-03, -2.52003316e-03,
    3.56842880e-03, -4.56488552e-03, 5.29586570e-03, -5.46336919e-03, 4.60291188e-03, -1.71456381e-03,
    -7.09895417e-03, 1.07278518e-01, 3.64114083e-02, -1.95812248e-02, 1.31968148e-02, -9.04653315e-03,
    5.89110376e-03, -3.43365991e-03, 1.58652698e-03, -2.97912542e-04, -4.98092326e-04, 8.90623021e-04,
    -9.84463724e-04, 8.86419788e-04, -6.91784837e-04, 4.74557950e-04, -2.83058209e-04, 1.40875985e-04,
    -5.18528286e-05, 7.13177815e-06, 7.71098257e-06, -6.98188887e-06, -1.37890875e-05, 4.46381673e-05,
    -1.01713107e-04, 1.86804231e-04, -2.90918746e-04, 3.89786903e-04, -4.41750686e-04, 3.89609602e-04,
    -1.67356891e-04, -2.88330513e-04, 1.02324877e-03, -2.04997347e-03, 3.33435857e-03, -4.78682015e-03,
    6.25898363e-03, -7.54104136e-03, 8.33889004e-03, -8.13165307e-03, 5.08398190e-03, 1.11914687e-01,
    1.98643506e-02, -1.43569447e-02, 1.13559086e-02, -8.81181750e-03, 6.48513483e-03, -4.40741656e-03,
    2.65467446e-03, -1.28306495e-03, 3.07764683e-04, 2.98820785e-04, -5.97966195e-04, 6.70060806e-04,
    -5.99017658e-04, 4.59141826e-04, -3.06636124e-04, 1.76452755e-04, -8.38773922e-05, 2.93234025e-05,
    -4.45382329e-06, -2.08098209e-06,
];

pub(super) static NINE_TO_EIGHT_BACK: [Float; 144] = [
    -2.60807828e-05, -1.66604787e-05, 2.21849095e-05, 6.23349479e-05, 5.63185968e-05, -1.54392073e-05,
    -1.07359359e-04, -1.29453503e-04, -2.71174085e-05, 1.44914520e-04, 2.37397733e-04, 1.27071296e-04,
    -1.47038416e-04, -3.68042209e-04, -3.01575055e-04, 7.59994000e-05, 4.90940933e-04, 5.54562372e-04,
    1.09572829e-04, -5.55457431e-04, -8.67316849e-04, -4.44309320e-04, 4.93785366e-04, 1.19072641e-03,
    9.42529703e-04, -2.30007456e-04, -1.44188548e-03, -1.58368074e-03, -3.04792746e-04, 1.50744163e-03,
    2.29987036e-03, 1.15278317e-03, -1.25515566e-03, -2.96889688e-03, -2.30780826e-03, 5.53658523e-04,
    3.41570424e-03, 3.69576830e-03, 7.01383047e-04, -3.42390453e-03, -5.16091241e-03, -2.55812518e-03,
    2.75697582e-03, 6.46109367e-03, 4.98090824e-03, -1.18626794e-03, -7.27282325e-03, -7.82852713e-03,
    -1.47972035e-03, 7.20316917e-03, 1.08411070e-02, 5.37315477e-03, -5.79927629e-03, -1.36339925e-02,
    -1.05640329e-02, 2.53419555e-03, 1.56875942e-02, 1.70980878e-02, 3.28305247e-03, -1.62974652e-02,
    -2.51280479e-02, -1.28296604e-02, 1.43626546e-02, 3.53266485e-02, 2.89570130e-02, -7.45793944e-03,
    -5.05860783e-02, -6.22213334e-02, -1.41169243e-02, 8.96753743e-02, 2.09294602e-01, 2.88972527e-01,
    2.88972527e-01, 2.09294602e-01, 8.96753743e-02, -1.41169243e-02, -6.22213334e-02, -5.05860783e-02,
    -7.45793944e-03, 2.89570130e-02, 3.53266485e-02, 1.43626546e-02, -1.28296604e-02, -2.51280479e-02,
    -1.62974652e-02, 3.28305247e-03, 1.70980878e-02, 1.56875942e-02, 2.53419555e-03, -1.05640329e-02,
    -1.36339925e-02, -5.79927629e-03, 5.37315477e-03, 1.08411070e-02, 7.20316917e-03, -1.47972035e-03,
    -7.82852713e-03, -7.27282325e-03, -1.18626794e-03, 4.98090824e-03, 6.46109367e-03, 2.75697582e-03,
    -2.55812518e-03, -5.16091241e-03, -3.42390453e-03, 7.01383047e-04, 3.69576830e-03, 3.41570424e-03,
    5.53658523e-04, -2.30780826e-03, -2.96889688e-03, -1.25515566e-03, 1.15278317e-03, 2.29987036e-03,
    1.50744163e-03, -3.04792746e-04, -1.58368074e-03, -1.44188548e-03, -2.30007456e-04, 9.42529703e-04,
    1.19072641e-03, 4.93785366e-04, -4.44309320e-04, -8.67316849e-04, -5.55457431e-04, 1.09572829e-04,
    5.54562372e-04, 4.90940933e-04, 7.59994000e-05, -3.01575055e-04, -3.68042209e-04, -1.47038416e-04,
    1.27071296e-04, 2.37397733e-04, 1.44914520e-04, -2.71174085e-05, -1.29453503e-04, -1.07359359e-04,
    -1.54392073e-05, 5.63185968e-05, 6.23349479e-05, 2.21849095e-05, -1.66604787e-05, -2.60807828e-05,
];
