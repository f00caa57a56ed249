//! erfc interval tables
//!
//! Interval `n` starts at `2^(n/4) - 1`, so the index of `|x|` is the
//! unbiased exponent of `(|x| + 1)^4`. Each row holds 13 coefficients of
//! `erfc(t) * exp(t^2)` expanded around the interval start, constant term
//! first. Row 20 is all zeros: past `|x| = 31` the result is 0 or 2.

#![allow(clippy::excessive_precision)]

/// Number of real intervals (row `ERFC_NUM_INTERVALS` is the zero row)
pub const ERFC_NUM_INTERVALS: usize = 20;

/// Coefficients per row
pub const ERFC_POLY_LEN: usize = 13;

/// Interval start points
pub static ERFC_XINT: [f64; ERFC_NUM_INTERVALS + 1] = [
    0.0, 0.18920711500272103, 0.41421356237309515, 0.681792830507429, 1.0,
    1.378414230005442, 1.8284271247461903, 2.363585661014858, 3.0, 3.756828460010884,
    4.656854249492381, 5.727171322029716, 7.0, 8.513656920021768, 10.313708498984761,
    12.454342644059432, 15.0, 18.027313840043536, 21.627416997969522, 25.908685288118864,
    31.0,
];

/// Polynomial coefficients, one row per interval
pub static ERFC_COEFFS: [[f64; ERFC_POLY_LEN]; ERFC_NUM_INTERVALS + 1] = [
    [
        1.0, -1.1283791670955126, 0.9999999999999979,
        -0.7522527780634253, 0.4999999999848654, -0.30090111067922126,
        0.16666665399441496, -0.0859715486963384, 0.04166455654267111,
        -0.0190892701051021, 0.008255178183250486, -0.003215951133422327,
        0.0008725483964500525,
    ],
    [
        0.8177813850886406, -0.8189190539444107, 0.6628360734710559,
        -0.46233716850830875, 0.2876792958037855, -0.1631624787789034,
        0.0856025826895424, -0.04199004555121062, 0.01941263622323586,
        -0.008503674960201005, 0.0035132297699283694, -0.001293276927533917,
        0.00032247900973560525,
    ],
    [
        0.6624638277927793, -0.579576162988785, 0.4223955206546543,
        -0.2697428064311037, 0.15533219590117398, -0.08216084071425063,
        0.040433337795991155, -0.0186891956180276, 0.008171660660950769,
        -0.0033939179307905234, 0.0013278964674129626, -0.00045745869606119056,
        0.0001039187916085196,
    ],
    [
        0.5331531866174327, -0.4013791266996026, 0.2594957757182915,
        -0.1496378448439418, 0.07873688291744427, -0.03838223999211491,
        0.01752270122540633, -0.007552833653033116, 0.003092446483859429,
        -0.0012060470899377643, 0.00044242360440800043, -0.00014114249038829524,
        2.894961728135657e-05,
    ],
    [
        0.427583576155807, -0.2732120147838984, 0.15437156137187952,
        -0.07922696893964042, 0.03757229616410612, -0.016661868164086227,
        0.006970131587689709, -0.002768980310385881, 0.0010498143797293869,
        -0.0003802575818033198, 0.00012932670376469884, -3.778090332155295e-05,
        6.933782131824831e-06,
    ],
    [
        0.342667640364082, -0.18370326381503665, 0.08944844742295399,
        -0.04027083402170041, 0.01696927832871099, -0.006752054984310215,
        0.0025540426056568886, -0.0009232447365864591, 0.0003201345203277619,
        -0.00010639374617291932, 3.3139645303651716e-05, -8.762702559437234e-06,
        1.4260594963611996e-06,
    ],
    [
        0.27503269947494735, -0.1226246712711901, 0.050822424359576894,
        -0.019799714682782403, 0.007310044447906449, -0.002573531962097838,
        0.0008681721629947479, -0.0002817318226422186, 8.817130765159679e-05,
        -2.653711027894619e-05, 7.473034435245691e-06, -1.767571656898963e-06,
        2.5284598157287435e-07,
    ],
    [
        0.22143367871915284, -0.08162423132279092, 0.02850781597320483,
        -0.0094957108397183, 0.003031944969920993, -0.0009317793905336374,
        0.000276532846356004, -7.946761850910883e-05, 2.2144238050447464e-05,
        -5.954874282925615e-06, 1.4963331530349999e-06, -3.129555545397133e-07,
        3.902014567875255e-08,
    ],
    [
        0.17900115118138996, -0.05437226000717244, 0.015884371159839712,
        -0.004479431017449029, 0.0012230390383321762, -0.0003241254170385848,
        8.355339448150919e-05, -2.0986530691926546e-05, 5.138470994857653e-06,
        -1.2183387794429353e-06, 2.69709712964579e-07, -4.933822799298918e-08,
        5.320160737781754e-09,
    ],
    [
        0.1453411945058622, -0.03633529523231097, 0.00883572327419409,
        -0.002093999046734459, 0.0004844640217905145, -0.00010958026270569175,
        2.426291816531114e-05, -5.264146988391864e-06, 1.1187618178142526e-06,
        -2.3100730638169832e-07, 4.4525161669281493e-08, -7.053843375749885e-09,
        6.532206199129065e-10,
    ],
    [
        0.11853314304856788, -0.024396025272689168, 0.004924409086705167,
        -0.0009758465936550382, 0.00019001686096792813, -3.638627883275234e-05,
        6.856964777967257e-06, -1.2723176709704622e-06, 2.322354919547542e-07,
        -4.131060012154976e-08, 6.861354772544729e-09, -9.333504773159771e-10,
        7.378271872005502e-11,
    ],
    [
        0.0970732978630765, -0.016468351782991813, 0.0027562258104182166,
        -0.0004553162428181741, 7.427583910266188e-05, -1.1970303544920894e-05,
        1.906577319590971e-06, -3.0017944192859567e-07, 4.665689308920537e-08,
        -7.086226602161281e-09, 1.0056082637596973e-09, -1.1663307632999423e-10,
        7.83175260307795e-12,
    ],
    [
        0.07980005432915294, -0.011178406487371357, 0.0015512089175468886,
        -0.00021329604292264179, 2.9068307652429577e-05, -3.927151274058311e-06,
        5.260684610889927e-07, -6.987467583850292e-08, 9.188333217464067e-09,
        -1.1833288695884766e-09, 1.4252815940103655e-10, -1.4017471005951614e-11,
        7.964459977182913e-13,
    ],
    [
        0.0658207829138836, -0.007628039223441032, 0.0008782739930334255,
        -0.00010047717659533897, 1.1422891197669171e-05, -1.2906382056418525e-06,
        1.449418852851772e-07, -1.6177314591124317e-08, 1.7914712551838563e-09,
        -1.946597203140831e-10, 1.9803210899029398e-11, -1.6448351472397243e-12,
        7.885220381663272e-14,
    ],
    [
        0.0544492971101229, -0.005230810358670719, 0.000500243857320772,
        -4.762735720801204e-05, 4.514589062851306e-06, -4.260799502044386e-07,
        4.003988320359952e-08, -3.745956140954081e-09, 3.4828908746194024e-10,
        -3.182219946038904e-11, 2.7251522315143608e-12, -1.9061946326227649e-13,
        7.694627558925196e-15,
    ],
    [
        0.045155994317313146, -0.0036027157734756085, 0.0002865376252888247,
        -2.271867179287962e-05, 1.7957510929403312e-06, -1.4150866749815846e-07,
        1.1117304486435928e-08, -8.706102499051435e-10, 6.783983234897937e-11,
        -5.2008202047455996e-12, 3.740991579752715e-13, -2.199606233970793e-14,
        7.46640499575966e-16,
    ],
    [
        0.03752960638850576, -0.0024909754403395733, 0.00016497478341122226,
        -1.0902459438499006e-05, 7.189458741076979e-07, -4.730841245638299e-08,
        3.1063544335547436e-09, -2.0349678625238528e-10, 1.327661254289098e-11,
        -8.529896209960146e-13, 5.1469426863644676e-14, -2.5409431319713587e-15,
        7.246781815992136e-17,
    ],
    [
        0.03124844543875274, -0.0017281012197674097, 9.54224026429791e-05,
        -5.261079962428385e-06, 2.8963149001201414e-07, -1.592082694212684e-08,
        8.738393239784182e-10, -4.7881259036726907e-11, 2.6145851798665234e-12,
        -1.4069489208894116e-13, 7.116728569722164e-15, -2.948096384067563e-16,
        7.061063877974032e-18,
    ],
    [
        0.026058979319888525, -0.001202342510125824, 5.541647901151668e-05,
        -2.5514733199258374e-06, 1.1735077017794978e-07, -5.39168905010609e-09,
        2.47459159048014e-10, -1.1343418019567034e-11, 5.184297242423802e-13,
        -2.3362338750041596e-14, 9.90378319303842e-16, -3.441574968784666e-17,
        6.920953043023215e-19,
    ],
    [
        0.02175989503825197, -0.000838622198373694, 3.2296424957248004e-05,
        -1.2428588147731472e-06, 4.7793528084228526e-08, -1.8365247402106757e-09,
        7.05180188334142e-11, -2.7052143761081385e-12, 1.0350346002088308e-13,
        -3.9064041372017074e-15, 1.3878608231564606e-16, -4.045514205819185e-18,
        6.83022209912329e-20,
    ],
    [
        0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,
        0.0, 0.0, 0.0,
        0.0,
    ],
];
